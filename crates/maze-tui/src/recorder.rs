//! Captures solver steps for later playback.

use maze_core::{Cell, Maze, Observer};

/// Snapshot of the maze grid at one solver step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn capture(maze: &Maze) -> Self {
        Self {
            rows: maze.rows(),
            cols: maze.cols(),
            cells: maze.cells().to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (`row`, `col`); anything outside the frame reads as a wall
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            Cell::Wall
        }
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marked).count()
    }
}

/// Ring buffer of the most recent frames.
///
/// Once `capacity` frames are held, each new frame replaces the oldest one.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
    capacity: usize,
    start: usize,
    total: usize,
}

impl FrameRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::new(),
            capacity,
            start: 0,
            total: 0,
        }
    }

    pub fn record(&mut self, frame: Frame) {
        self.total += 1;
        if self.capacity == 0 {
            return;
        }
        if self.frames.len() < self.capacity {
            self.frames.push(frame);
        } else {
            self.frames[self.start] = frame;
            self.start = (self.start + 1) % self.capacity;
        }
    }

    /// Held frames, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames[self.start..]
            .iter()
            .chain(self.frames[..self.start].iter())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Every frame ever recorded, including those since overwritten
    pub fn total_captured(&self) -> usize {
        self.total
    }
}

impl Observer for FrameRecorder {
    fn notify(&mut self, maze: &Maze) {
        self.record(Frame::capture(maze));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Solver;

    fn corridor() -> Maze {
        Maze::new(3, 5, &["#####", "E   S", "#####"]).unwrap()
    }

    #[test]
    fn test_records_every_step() {
        let mut maze = corridor();
        let mut recorder = FrameRecorder::new(200);
        assert!(Solver::with_observer(&mut maze, &mut recorder)
            .unwrap()
            .solve()
            .unwrap());

        assert_eq!(recorder.len(), 6);
        assert_eq!(recorder.total_captured(), 6);
        let marked: Vec<usize> = recorder.frames().map(|f| f.marked_count()).collect();
        assert_eq!(marked, vec![0, 1, 2, 3, 3, 3]);
        assert_eq!(recorder.frames().last(), Some(&Frame::capture(&maze)));
    }

    #[test]
    fn test_keeps_most_recent_frames() {
        let mut maze = corridor();
        let mut recorder = FrameRecorder::new(4);
        Solver::with_observer(&mut maze, &mut recorder)
            .unwrap()
            .solve()
            .unwrap();

        assert_eq!(recorder.len(), 4);
        assert_eq!(recorder.total_captured(), 6);
        // The two oldest frames (0 and 1 marks) were overwritten
        let marked: Vec<usize> = recorder.frames().map(|f| f.marked_count()).collect();
        assert_eq!(marked, vec![2, 3, 3, 3]);
    }

    #[test]
    fn test_zero_capacity_only_counts() {
        let mut recorder = FrameRecorder::new(0);
        recorder.notify(&corridor());
        assert!(recorder.is_empty());
        assert_eq!(recorder.total_captured(), 1);
        assert!(recorder.frames().next().is_none());
    }

    #[test]
    fn test_huge_capacity_grows_on_demand() {
        let mut recorder = FrameRecorder::new(usize::MAX / 8);
        recorder.notify(&corridor());
        recorder.notify(&corridor());
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.total_captured(), 2);
    }

    #[test]
    fn test_frame_cells() {
        let frame = Frame::capture(&corridor());
        assert_eq!(frame.rows(), 3);
        assert_eq!(frame.cols(), 5);
        assert_eq!(frame.cell(1, 0), Cell::Entrance);
        assert_eq!(frame.cell(1, 4), Cell::Exit);
        assert_eq!(frame.cell(1, 2), Cell::Open);
        assert_eq!(frame.cell(7, 7), Cell::Wall);
    }
}
