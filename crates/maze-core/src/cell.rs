use serde::{Deserialize, Serialize};

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    Entrance,
    Exit,
    /// On the path currently being explored
    Marked,
}

impl Cell {
    /// Map a maze file character to a cell. Anything unrecognised is open floor.
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => Cell::Wall,
            'E' => Cell::Entrance,
            'S' => Cell::Exit,
            '*' => Cell::Marked,
            _ => Cell::Open,
        }
    }

    /// The character used for this cell in maze files and printed grids
    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Entrance => 'E',
            Cell::Exit => 'S',
            Cell::Marked => '*',
        }
    }

    /// Whether the solver may step onto this cell
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Open | Cell::Exit)
    }

    /// Only open and marked cells may change after the maze is built
    pub fn is_mutable(self) -> bool {
        matches!(self, Cell::Open | Cell::Marked)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A (row, column) position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance, 1 for orthogonal neighbours
    pub fn distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The neighbour one step in `dir`, or `None` when it would go below zero
    pub fn step(&self, dir: Direction) -> Option<Coordinate> {
        match dir {
            Direction::Left => self.col.checked_sub(1).map(|c| Coordinate::new(self.row, c)),
            Direction::Right => Some(Coordinate::new(self.row, self.col + 1)),
            Direction::Up => self.row.checked_sub(1).map(|r| Coordinate::new(r, self.col)),
            Direction::Down => Some(Coordinate::new(self.row + 1, self.col)),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four axis-aligned moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Neighbour order used by the solver. Changing it changes which path is found.
    pub const SEARCH_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
}
