use crate::config::Settings;
use crate::loader;
use crate::recorder::FrameRecorder;
use crate::render;
use crate::theme::Theme;
use anyhow::Context;
use maze_core::{Maze, SolveStats, Solver};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Typed at the prompt to leave the command loop
pub const QUIT_COMMAND: &str = "quit";

const PROMPT: &str = "Maze file ('quit' to exit): ";

/// What was captured for playback during a solve
#[derive(Debug)]
pub enum Recording {
    /// Frames captured by the observer
    Frames(FrameRecorder),
    /// Animation switched off
    Disabled,
    /// Too many cells to record; solved without an observer
    TooLarge { cells: usize },
}

/// Everything the front end shows after one solve
#[derive(Debug)]
pub struct SolveReport {
    /// The maze as the solver left it
    pub maze: Maze,
    pub found: bool,
    pub stats: SolveStats,
    pub recording: Recording,
}

/// The interactive front end
pub struct App {
    settings: Settings,
    theme: Theme,
    animate: bool,
}

impl App {
    pub fn new(settings: Settings, animate: bool) -> Self {
        Self {
            theme: Theme::from_name(settings.theme),
            settings,
            animate,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Path of a maze named at the prompt
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.settings.maze_dir.join(name)
    }

    /// Load the maze at `path` and solve it
    pub fn solve_file(&self, path: &Path) -> anyhow::Result<SolveReport> {
        let maze = loader::load_maze(path)?;
        self.solve_maze(maze)
            .with_context(|| format!("failed to solve {}", path.display()))
    }

    /// Solve `maze`, recording frames when animation is on and the maze is small enough
    pub fn solve_maze(&self, mut maze: Maze) -> maze_core::Result<SolveReport> {
        let cells = maze.cell_count();

        let (found, stats, recording) = if !self.animate {
            let mut solver = Solver::new(&mut maze)?;
            let found = solver.solve()?;
            (found, solver.stats(), Recording::Disabled)
        } else if cells > self.settings.max_animated_cells {
            let mut solver = Solver::new(&mut maze)?;
            let found = solver.solve()?;
            (found, solver.stats(), Recording::TooLarge { cells })
        } else {
            let mut recorder = FrameRecorder::new(self.settings.frame_capacity);
            let mut solver = Solver::with_observer(&mut maze, &mut recorder)?;
            let found = solver.solve()?;
            let stats = solver.stats();
            drop(solver);
            (found, stats, Recording::Frames(recorder))
        };

        log::info!(
            "{} in {} advances, {} backtracks, {} cells visited",
            if found { "path found" } else { "no path" },
            stats.advances,
            stats.backtracks,
            stats.cells_visited
        );

        Ok(SolveReport {
            maze,
            found,
            stats,
            recording,
        })
    }

    /// Animate (when frames were recorded), then print the outcome and the final grid
    pub fn present<W: Write>(&self, report: &SolveReport, out: &mut W) -> io::Result<()> {
        match &report.recording {
            Recording::Frames(recorder) if !recorder.is_empty() => {
                log::debug!(
                    "playing {} of {} captured frames",
                    recorder.len(),
                    recorder.total_captured()
                );
                let frames: Vec<_> = recorder.frames().collect();
                if let Err(e) = render::animate(
                    &mut io::stdout(),
                    &frames,
                    &self.theme,
                    self.settings.frame_delay(),
                    report.found,
                ) {
                    log::warn!("animation failed: {}", e);
                }
            }
            Recording::TooLarge { cells } => {
                writeln!(out, "Maze too large ({} cells), no animation.\n", cells)?;
            }
            Recording::Frames(_) | Recording::Disabled => {}
        }

        if report.found {
            writeln!(out, "Path found!\n")?;
        } else {
            writeln!(out, "No path.\n")?;
        }
        writeln!(out, "{}", report.maze)?;
        writeln!(out)?;
        Ok(())
    }

    /// Prompt for maze names until `quit` or end of input.
    ///
    /// A missing file or an invalid maze is reported on `err` and the loop goes on.
    pub fn run<R, W, E>(&self, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let name = line?;
            let name = name.trim();

            if name.eq_ignore_ascii_case(QUIT_COMMAND) {
                break;
            }
            if name.is_empty() {
                continue;
            }

            let path = self.resolve(name);
            if !path.exists() {
                writeln!(err, "Maze file not found: {}\n", path.display())?;
                continue;
            }

            match self.solve_file(&path) {
                Ok(report) => self.present(&report, out)?,
                Err(e) => writeln!(err, "Error: {:#}\n", e)?,
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }
}
