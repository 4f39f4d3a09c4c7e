//! Hook for watching the solver work.

use crate::Maze;

/// Receives the maze after every state-changing solver step.
///
/// Called synchronously; the solver waits for `notify` to return but never depends
/// on what it does.
pub trait Observer {
    fn notify(&mut self, maze: &Maze);
}

impl<F> Observer for F
where
    F: FnMut(&Maze),
{
    fn notify(&mut self, maze: &Maze) {
        self(maze)
    }
}
