//! Error types for maze construction, grid access and the bounded containers.

use crate::Coordinate;

/// Errors raised by the maze model and the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The declared dimensions are unusable or not enough rows were supplied.
    #[error("invalid dimensions {rows}x{cols} with {supplied} row(s) supplied")]
    InvalidDimensions {
        /// Declared row count.
        rows: i64,
        /// Declared column count.
        cols: i64,
        /// Number of grid rows actually supplied.
        supplied: usize,
    },

    /// An entrance lies off the border, or the entrance count is not exactly one.
    #[error("invalid entrance: {0}")]
    InvalidEntrance(EntranceFault),

    /// The exit count is not exactly one.
    #[error("invalid number of exits: {count}")]
    InvalidExit {
        /// Number of `S` cells found.
        count: usize,
    },

    /// A coordinate falls outside the grid.
    #[error("coordinate {pos} is out of bounds")]
    OutOfBounds {
        /// The offending coordinate.
        pos: Coordinate,
    },

    /// A write tried to change a wall, entrance or exit, or to write one.
    #[error("cell {pos} cannot be changed from {from:?} to {to:?}")]
    ImmutableCell {
        /// The cell that was written.
        pos: Coordinate,
        /// Its contents before the write.
        from: crate::Cell,
        /// The rejected new contents.
        to: crate::Cell,
    },

    /// A bounded container was already full.
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The fixed capacity of the container.
        capacity: usize,
    },

    /// A bounded container was empty.
    #[error("container underflow")]
    Underflow,

    /// `solve` was called on a solver that already ran.
    #[error("solver has already run")]
    AlreadySolved,
}

/// Why an entrance was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceFault {
    /// An `E` cell that is not on the outer border.
    OffBorder(Coordinate),
    /// Zero or more than one `E` cell.
    Count(usize),
}

impl std::fmt::Display for EntranceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntranceFault::OffBorder(pos) => write!(f, "entrance {} is not on the border", pos),
            EntranceFault::Count(n) => write!(f, "expected exactly one entrance, found {}", n),
        }
    }
}

/// Result alias for maze operations.
pub type Result<T> = std::result::Result<T, Error>;
