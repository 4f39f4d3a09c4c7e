//! Maze model and backtracking solver.
//!
//! A [`Maze`] is built from its declared size and textual rows and validated on
//! construction. A [`Solver`] walks it depth-first from the entrance using
//! fixed-capacity stacks and queues, marking the path it is exploring directly in
//! the grid. An optional [`Observer`] sees the maze after every step.
//!
//! ```
//! use maze_core::{Maze, Solver};
//!
//! let mut maze = Maze::new(3, 5, &["#####", "E   S", "#####"]).unwrap();
//! let found = Solver::new(&mut maze).unwrap().solve().unwrap();
//! assert!(found);
//! assert_eq!(maze.row_string(1).unwrap(), "E***S");
//! ```

pub mod bounded;
mod cell;
pub mod error;
mod maze;
pub mod solver;

pub use bounded::{BoundedQueue, BoundedStack};
pub use cell::{Cell, Coordinate, Direction};
pub use error::{Error, Result};
pub use maze::{Maze, MAX_CELLS};
pub use solver::{solve, Observer, Outcome, SolveStats, Solver};
