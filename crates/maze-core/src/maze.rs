use crate::error::EntranceFault;
use crate::{Cell, Coordinate, Error, Result};

/// Largest grid accepted, in cells
pub const MAX_CELLS: usize = 100_000_000;

/// A rectangular maze with exactly one entrance on the border and exactly one exit.
///
/// Cells are stored row-major. After construction only `Open` and `Marked` cells
/// may change, so the entrance/exit invariant holds for the life of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Maze {
    /// Build a maze from its declared size and textual rows.
    ///
    /// Rows shorter than `cols` are padded with open cells; characters past `cols`
    /// are ignored. Extra rows past `rows` are ignored as well. Grids larger than
    /// [`MAX_CELLS`] are rejected as invalid dimensions.
    pub fn new<S: AsRef<str>>(rows: usize, cols: usize, lines: &[S]) -> Result<Self> {
        let invalid = || Error::InvalidDimensions {
            rows: i64::try_from(rows).unwrap_or(i64::MAX),
            cols: i64::try_from(cols).unwrap_or(i64::MAX),
            supplied: lines.len(),
        };
        if rows < 1 || cols < 1 || lines.len() < rows {
            return Err(invalid());
        }
        let cell_count = rows
            .checked_mul(cols)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or_else(invalid)?;

        let mut cells = Vec::with_capacity(cell_count);
        for line in &lines[..rows] {
            cells.extend(
                line.as_ref()
                    .chars()
                    .chain(std::iter::repeat(' '))
                    .take(cols)
                    .map(Cell::from_char),
            );
        }

        let maze = Self { cells, rows, cols };
        maze.validate()?;
        log::debug!("built {}x{} maze", rows, cols);
        Ok(maze)
    }

    fn validate(&self) -> Result<()> {
        let mut entrances = 0;
        let mut exits = 0;

        for (pos, cell) in self.iter() {
            match cell {
                Cell::Entrance => {
                    if !self.is_border(pos) {
                        return Err(Error::InvalidEntrance(EntranceFault::OffBorder(pos)));
                    }
                    entrances += 1;
                }
                Cell::Exit => exits += 1,
                _ => {}
            }
        }

        if entrances != 1 {
            return Err(Error::InvalidEntrance(EntranceFault::Count(entrances)));
        }
        if exits != 1 {
            return Err(Error::InvalidExit { count: exits });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Whether `pos` lies on the outermost ring of cells
    pub fn is_border(&self, pos: Coordinate) -> bool {
        pos.row == 0 || pos.row == self.rows - 1 || pos.col == 0 || pos.col == self.cols - 1
    }

    /// Row-major index of an in-bounds coordinate
    pub fn index(&self, pos: Coordinate) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(Error::OutOfBounds { pos })
        }
    }

    /// Read the cell at `pos`
    pub fn get(&self, pos: Coordinate) -> Result<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Toggle the cell at `pos` between `Open` and `Marked`.
    ///
    /// Walls, the entrance and the exit cannot be overwritten, and nothing else can
    /// be written in their place.
    pub fn set(&mut self, pos: Coordinate, value: Cell) -> Result<()> {
        let current = self.get(pos)?;
        if !current.is_mutable() || !value.is_mutable() {
            return Err(Error::ImmutableCell {
                pos,
                from: current,
                to: value,
            });
        }
        let idx = self.index(pos)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn entrance(&self) -> Option<Coordinate> {
        self.find(Cell::Entrance)
    }

    pub fn exit(&self) -> Option<Coordinate> {
        self.find(Cell::Exit)
    }

    fn find(&self, target: Cell) -> Option<Coordinate> {
        self.iter().find(|&(_, cell)| cell == target).map(|(pos, _)| pos)
    }

    /// Iterate over every cell with its coordinate, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coordinate::new(idx / cols, idx % cols), cell))
    }

    /// One row rendered with the maze file alphabet
    pub fn row_string(&self, row: usize) -> Option<String> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(self.cells[start..start + self.cols].iter().map(|c| c.to_char()).collect())
    }

    /// Number of cells currently holding `Marked`
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marked).count()
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        Maze::new(3, 5, &["#####", "E   S", "#####"]).unwrap()
    }

    #[test]
    fn test_build_and_lookup() {
        let maze = corridor();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 5);
        assert_eq!(maze.entrance(), Some(Coordinate::new(1, 0)));
        assert_eq!(maze.exit(), Some(Coordinate::new(1, 4)));
        assert_eq!(maze.get(Coordinate::new(0, 0)), Ok(Cell::Wall));
        assert_eq!(maze.get(Coordinate::new(1, 2)), Ok(Cell::Open));
        assert_eq!(maze.to_string(), "#####\nE   S\n#####");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let maze = Maze::new(3, 4, &["####", "E", "#S##"]).unwrap();
        assert_eq!(maze.row_string(1).as_deref(), Some("E   "));
        assert_eq!(maze.get(Coordinate::new(1, 3)), Ok(Cell::Open));
    }

    #[test]
    fn test_long_rows_and_extra_rows_are_cut() {
        let maze = Maze::new(2, 2, &["ES##", "##", "E"]).unwrap();
        assert_eq!(maze.to_string(), "ES\n##");
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Maze::new(0, 3, &["E S"]),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Maze::new(1, 0, &["ES"]),
            Err(Error::InvalidDimensions { .. })
        ));
        assert_eq!(
            Maze::new(3, 3, &["E S", "   "]),
            Err(Error::InvalidDimensions {
                rows: 3,
                cols: 3,
                supplied: 2
            })
        );
    }

    #[test]
    fn test_oversized_dimensions() {
        let rows = ["E", "", "", "S"];
        assert_eq!(
            Maze::new(4, usize::MAX / 2, &rows),
            Err(Error::InvalidDimensions {
                rows: 4,
                cols: i64::MAX,
                supplied: 4
            })
        );
        assert!(matches!(
            Maze::new(4, MAX_CELLS / 4 + 1, &rows),
            Err(Error::InvalidDimensions { rows: 4, .. })
        ));
        assert!(Maze::new(4, 1, &rows).is_ok());
    }

    #[test]
    fn test_entrance_validation() {
        assert_eq!(
            Maze::new(3, 3, &["###", "# S", "###"]),
            Err(Error::InvalidEntrance(EntranceFault::Count(0)))
        );
        assert_eq!(
            Maze::new(3, 3, &["#E#", "E S", "###"]),
            Err(Error::InvalidEntrance(EntranceFault::Count(2)))
        );
        assert_eq!(
            Maze::new(3, 3, &["###", "#ES", "###"]),
            Err(Error::InvalidEntrance(EntranceFault::OffBorder(
                Coordinate::new(1, 1)
            )))
        );
        // Every border side is accepted
        assert!(Maze::new(3, 3, &["#E#", "  S", "###"]).is_ok());
        assert!(Maze::new(3, 3, &["###", "S E", "###"]).is_ok());
        assert!(Maze::new(3, 3, &["###", "S  ", "#E#"]).is_ok());
    }

    #[test]
    fn test_exit_validation() {
        assert_eq!(
            Maze::new(3, 3, &["###", "E  ", "###"]),
            Err(Error::InvalidExit { count: 0 })
        );
        assert_eq!(
            Maze::new(3, 3, &["###", "ESS", "###"]),
            Err(Error::InvalidExit { count: 2 })
        );
        // The exit may sit anywhere
        assert!(Maze::new(3, 3, &["###", "ES#", "###"]).is_ok());
    }

    #[test]
    fn test_bounds_checks() {
        let mut maze = corridor();
        let outside = Coordinate::new(3, 0);
        assert_eq!(maze.get(outside), Err(Error::OutOfBounds { pos: outside }));
        assert_eq!(
            maze.set(Coordinate::new(0, 5), Cell::Marked),
            Err(Error::OutOfBounds {
                pos: Coordinate::new(0, 5)
            })
        );
    }

    #[test]
    fn test_set_only_toggles_open_and_marked() {
        let mut maze = corridor();
        let pos = Coordinate::new(1, 2);
        maze.set(pos, Cell::Marked).unwrap();
        assert_eq!(maze.get(pos), Ok(Cell::Marked));
        assert_eq!(maze.marked_count(), 1);
        maze.set(pos, Cell::Open).unwrap();
        assert_eq!(maze.get(pos), Ok(Cell::Open));

        assert!(matches!(
            maze.set(Coordinate::new(1, 0), Cell::Marked),
            Err(Error::ImmutableCell { .. })
        ));
        assert!(matches!(
            maze.set(Coordinate::new(0, 0), Cell::Open),
            Err(Error::ImmutableCell { .. })
        ));
        assert!(matches!(
            maze.set(pos, Cell::Exit),
            Err(Error::ImmutableCell { .. })
        ));
        assert_eq!(maze.exit(), Some(Coordinate::new(1, 4)));
    }
}
