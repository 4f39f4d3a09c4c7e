//! Reading mazes from text files.
//!
//! The first line holds the row count, the second the column count, and the
//! following lines the maze itself.

use maze_core::Maze;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing {what} on line {line}")]
    MissingHeader { line: usize, what: &'static str },

    #[error("value on line {line} is not an integer: {value:?}")]
    NotAnInteger { line: usize, value: String },

    #[error(transparent)]
    Maze(#[from] maze_core::Error),
}

/// Load and validate the maze stored at `path`
pub fn load_maze(path: &Path) -> Result<Maze, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let maze = parse_maze(&text)?;
    log::info!(
        "loaded {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

/// Parse maze file contents
pub fn parse_maze(text: &str) -> Result<Maze, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    let rows = parse_header(&lines, 0, "row count")?;
    let cols = parse_header(&lines, 1, "column count")?;
    let body = lines.get(2..).unwrap_or(&[]);

    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok(Maze::new(r, c, body)?),
        _ => Err(maze_core::Error::InvalidDimensions {
            rows,
            cols,
            supplied: body.len(),
        }
        .into()),
    }
}

fn parse_header(lines: &[&str], idx: usize, what: &'static str) -> Result<i64, LoadError> {
    let raw = lines
        .get(idx)
        .ok_or(LoadError::MissingHeader { line: idx + 1, what })?;
    raw.trim().parse().map_err(|_| LoadError::NotAnInteger {
        line: idx + 1,
        value: raw.to_string(),
    })
}
