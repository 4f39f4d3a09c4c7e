use serde::{Deserialize, Serialize};

/// Counters collected over one solver run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Steps onto a new cell
    pub advances: usize,
    /// Cells abandoned because their frontier ran dry
    pub backtracks: usize,
    /// Cells ever marked visited, the entrance included
    pub cells_visited: usize,
    /// Longest path reached, counted in cells
    pub max_depth: usize,
    /// Observer notifications sent
    pub notifications: usize,
}

/// Lifecycle of a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Constructed, `solve` not yet called
    Pending,
    /// Reached the exit
    Found,
    /// Ran out of cells to try
    Exhausted,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pending => write!(f, "Pending"),
            Outcome::Found => write!(f, "Path found"),
            Outcome::Exhausted => write!(f, "No path"),
        }
    }
}
