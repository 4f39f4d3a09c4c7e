mod app;
mod config;
mod loader;
mod recorder;
mod render;
mod theme;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::{Settings, ThemeName};
use std::io;
use std::path::PathBuf;

/// Solve mazes with a backtracking depth-first search and watch it work
#[derive(Debug, Parser)]
#[command(name = "maze", version, about)]
struct Args {
    /// Solve this maze file once and exit instead of prompting
    file: Option<PathBuf>,

    /// Directory that names typed at the prompt are looked up in
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Delay between animation frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Number of most recent frames kept for playback
    #[arg(long)]
    frames: Option<usize>,

    /// Largest maze, in cells, that is still animated
    #[arg(long)]
    max_cells: Option<usize>,

    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Skip the animation and only print the result
    #[arg(long)]
    no_animate: bool,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Override settings with whatever was given on the command line
    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.dir {
            settings.maze_dir = dir.clone();
        }
        if let Some(delay) = self.delay_ms {
            settings.frame_delay_ms = delay;
        }
        if let Some(frames) = self.frames {
            settings.frame_capacity = frames;
        }
        if let Some(cells) = self.max_cells {
            settings.max_animated_cells = cells;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    args.apply(&mut settings);
    log::debug!("settings: {:?}", settings);

    let app = App::new(settings, !args.no_animate);
    let mut stdout = io::stdout();

    match &args.file {
        Some(path) => {
            let report = app.solve_file(path)?;
            app.present(&report, &mut stdout)?;
        }
        None => {
            log::debug!("reading mazes from {}", app.settings().maze_dir.display());
            let stdin = io::stdin();
            app.run(stdin.lock(), &mut stdout, &mut io::stderr())?;
        }
    }

    Ok(())
}
