use crate::recorder::Frame;
use crate::theme::Theme;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Rows used above and below the grid for text
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 3;

/// Result of handling a key press during playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Continue,
    Close,
}

/// Position within a looping frame sequence
#[derive(Debug, Clone)]
pub struct Playback {
    len: usize,
    index: usize,
    paused: bool,
}

impl Playback {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one frame, wrapping back to the first after the last
    pub fn tick(&mut self) {
        if !self.paused {
            self.step_forward();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> PlaybackAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return PlaybackAction::Close,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Right => {
                self.paused = true;
                self.step_forward();
            }
            KeyCode::Left => {
                self.paused = true;
                self.step_back();
            }
            KeyCode::Home => self.index = 0,
            KeyCode::End => self.index = self.len.saturating_sub(1),
            _ => {}
        }
        PlaybackAction::Continue
    }

    fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    fn step_back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// Play `frames` in the alternate screen until the user closes the view.
pub fn animate(
    stdout: &mut io::Stdout,
    frames: &[&Frame],
    theme: &Theme,
    delay: Duration,
    found: bool,
) -> io::Result<()> {
    if frames.is_empty() {
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_playback(stdout, frames, theme, delay, found);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, ResetColor, Show, LeaveAlternateScreen)?;

    result
}

fn run_playback(
    stdout: &mut io::Stdout,
    frames: &[&Frame],
    theme: &Theme,
    delay: Duration,
    found: bool,
) -> io::Result<()> {
    let mut playback = Playback::new(frames.len());
    let mut last_tick = Instant::now();

    execute!(stdout, SetBackgroundColor(theme.bg), Clear(ClearType::All))?;

    loop {
        render_frame(stdout, frames[playback.index()], theme, &playback, frames.len(), found)?;
        stdout.flush()?;

        let timeout = delay.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }
                    if playback.handle_key(key.code) == PlaybackAction::Close {
                        break;
                    }
                }
            }
        }

        if last_tick.elapsed() >= delay {
            playback.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn render_frame(
    stdout: &mut io::Stdout,
    frame: &Frame,
    theme: &Theme,
    playback: &Playback,
    total: usize,
    found: bool,
) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    // Each cell is two columns wide so cells come out roughly square
    let visible_cols = frame.cols().min(term_width as usize / 2);
    let visible_rows = frame
        .rows()
        .min(term_height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize);

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.info),
        Print(format!(
            "Maze {}x{}   frame {:>4}/{:<4}  path {:>4}{}",
            frame.rows(),
            frame.cols(),
            playback.index() + 1,
            total,
            frame.marked_count(),
            if playback.is_paused() { "  (paused)" } else { "           " }
        ))
    )?;

    for row in 0..visible_rows {
        queue!(stdout, MoveTo(0, HEADER_ROWS + row as u16))?;
        for col in 0..visible_cols {
            queue!(
                stdout,
                SetBackgroundColor(theme.cell_color(frame.cell(row, col))),
                Print("  ")
            )?;
        }
    }

    let status_y = HEADER_ROWS + visible_rows as u16 + 1;
    let (status, color) = if found {
        ("Path found!", theme.success)
    } else {
        ("No path.", theme.error)
    };
    queue!(
        stdout,
        MoveTo(0, status_y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(color),
        Print(status),
        MoveTo(0, status_y + 1),
        SetForegroundColor(theme.key),
        Print("[space]"),
        SetForegroundColor(theme.fg),
        Print(" pause  "),
        SetForegroundColor(theme.key),
        Print("[←/→]"),
        SetForegroundColor(theme.fg),
        Print(" step  "),
        SetForegroundColor(theme.key),
        Print("[q]"),
        SetForegroundColor(theme.fg),
        Print(" close")
    )?;

    Ok(())
}
