//! Iterative depth-first search with explicit backtracking.
//!
//! The recursion of a textbook DFS is replaced by two stacks kept at the same
//! height: the path from the entrance to the current cell, and for every cell on
//! that path the queue of neighbours it has not tried yet. Each cell's queue is
//! built once, when the cell is entered, and is then consumed one neighbour at a
//! time. A cell enters at most one queue over the whole run because it is marked
//! visited the moment it is queued, which bounds both stacks by the cell count.

mod observer;
mod types;

use crate::bounded::{BoundedQueue, BoundedStack};
use crate::error::EntranceFault;
use crate::{Cell, Coordinate, Direction, Error, Maze, Result};

pub use observer::Observer;
pub use types::{Outcome, SolveStats};

/// One slot per axis-aligned direction
const NEIGHBOR_SLOTS: usize = 4;

/// Backtracking maze solver bound to a single maze for a single run.
///
/// Cells on the current path are written into the maze as `Cell::Marked` and
/// reset to `Cell::Open` when the solver backs out of them, so after a successful
/// run the maze shows the path that was found.
pub struct Solver<'a> {
    maze: &'a mut Maze,
    path: BoundedStack<Coordinate>,
    frontier: BoundedStack<BoundedQueue<Coordinate>>,
    visited: Vec<bool>,
    current: Coordinate,
    observer: Option<&'a mut dyn Observer>,
    outcome: Outcome,
    stats: SolveStats,
}

impl<'a> Solver<'a> {
    /// Create a solver with no observer
    pub fn new(maze: &'a mut Maze) -> Result<Self> {
        Self::build(maze, None)
    }

    /// Create a solver that reports every step to `observer`
    pub fn with_observer(maze: &'a mut Maze, observer: &'a mut dyn Observer) -> Result<Self> {
        Self::build(maze, Some(observer))
    }

    fn build(maze: &'a mut Maze, observer: Option<&'a mut dyn Observer>) -> Result<Self> {
        let entrance = maze
            .entrance()
            .ok_or(Error::InvalidEntrance(EntranceFault::Count(0)))?;
        let capacity = maze.cell_count();

        let mut solver = Self {
            path: BoundedStack::new(capacity),
            frontier: BoundedStack::new(capacity),
            visited: vec![false; capacity],
            current: entrance,
            observer,
            outcome: Outcome::Pending,
            stats: SolveStats::default(),
            maze,
        };

        solver.mark_visited(entrance)?;
        solver.path.push(entrance)?;
        let adjacent = solver.adjacents(entrance)?;
        solver.frontier.push(adjacent)?;
        solver.stats.max_depth = 1;
        solver.notify();

        Ok(solver)
    }

    /// Run the search to completion, returning whether the exit was reached.
    ///
    /// On success the cells of the path stay marked in the maze. On failure every
    /// marked cell has been reset and the maze is back to its original contents.
    pub fn solve(&mut self) -> Result<bool> {
        if self.outcome != Outcome::Pending {
            return Err(Error::AlreadySolved);
        }
        log::debug!(
            "solving {}x{} maze from {}",
            self.maze.rows(),
            self.maze.cols(),
            self.current
        );

        while !self.path.is_empty() {
            if self.maze.get(self.current)? == Cell::Exit {
                self.notify();
                return self.finish(Outcome::Found);
            }

            let mut queue = self.frontier.pop()?;
            if queue.is_empty() {
                self.backtrack()?;
            } else {
                let next = queue.dequeue()?;
                self.frontier.push(queue)?;
                self.advance(next)?;
            }
        }

        self.notify();
        self.finish(Outcome::Exhausted)
    }

    /// Abandon the top of the path. Its frontier has already been popped.
    fn backtrack(&mut self) -> Result<()> {
        let abandoned = self.path.pop()?;
        if self.maze.get(abandoned)? == Cell::Marked {
            self.maze.set(abandoned, Cell::Open)?;
        }
        self.stats.backtracks += 1;
        log::trace!("backtrack from {}", abandoned);
        self.notify();

        // The new top keeps the frontier it was given when first entered
        if let Some(&top) = self.path.peek() {
            self.current = top;
        }
        Ok(())
    }

    fn advance(&mut self, next: Coordinate) -> Result<()> {
        if self.maze.get(next)? != Cell::Exit {
            self.maze.set(next, Cell::Marked)?;
        }
        self.path.push(next)?;
        let adjacent = self.adjacents(next)?;
        self.frontier.push(adjacent)?;
        self.current = next;

        self.stats.advances += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.path.len());
        log::trace!("advance to {}", next);
        self.notify();
        Ok(())
    }

    /// Queue the unvisited passable neighbours of `from`, marking each one visited.
    fn adjacents(&mut self, from: Coordinate) -> Result<BoundedQueue<Coordinate>> {
        let mut queue = BoundedQueue::new(NEIGHBOR_SLOTS);
        for dir in Direction::SEARCH_ORDER {
            let Some(pos) = from.step(dir) else {
                continue;
            };
            if !self.maze.contains(pos) {
                continue;
            }
            if self.maze.get(pos)?.is_passable() && !self.is_visited(pos) {
                self.mark_visited(pos)?;
                queue.enqueue(pos)?;
            }
        }
        Ok(queue)
    }

    fn mark_visited(&mut self, pos: Coordinate) -> Result<()> {
        let idx = self.maze.index(pos)?;
        self.visited[idx] = true;
        self.stats.cells_visited += 1;
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.notify(&*self.maze);
            self.stats.notifications += 1;
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<bool> {
        self.outcome = outcome;
        log::debug!(
            "{} after {} advances and {} backtracks",
            outcome,
            self.stats.advances,
            self.stats.backtracks
        );
        Ok(outcome == Outcome::Found)
    }

    /// Whether `pos` has ever been queued as a candidate. Out-of-bounds is `false`.
    pub fn is_visited(&self, pos: Coordinate) -> bool {
        self.maze
            .index(pos)
            .map(|idx| self.visited[idx])
            .unwrap_or(false)
    }

    /// The current path, entrance first. After a successful run it ends at the exit.
    pub fn path(&self) -> Vec<Coordinate> {
        self.path.iter().copied().collect()
    }

    /// The cell at the top of the path
    pub fn current(&self) -> Coordinate {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Read access to the maze being solved
    pub fn maze(&self) -> &Maze {
        &*self.maze
    }
}

/// Solve `maze` in place, optionally reporting each step to `observer`.
pub fn solve(maze: &mut Maze, observer: Option<&mut dyn Observer>) -> Result<bool> {
    let mut solver = match observer {
        Some(observer) => Solver::with_observer(maze, observer)?,
        None => Solver::new(maze)?,
    };
    solver.solve()
}
