use crate::config::ThemeName;
use crossterm::style::Color;
use maze_core::Cell;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Wall cell color
    pub wall: Color,
    /// Open floor color
    pub open: Color,
    /// Entrance cell color
    pub entrance: Color,
    /// Exit cell color
    pub exit: Color,
    /// Color of cells on the path being explored
    pub marked: Color,
    /// Success/path found color
    pub success: Color,
    /// Failure/no path color
    pub error: Color,
    /// Frame counter/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            wall: Color::Rgb { r: 8, g: 8, b: 12 },
            open: Color::Rgb { r: 225, g: 225, b: 232 },
            entrance: Color::Rgb { r: 90, g: 220, b: 120 },
            exit: Color::Rgb { r: 80, g: 140, b: 255 },
            marked: Color::Rgb { r: 235, g: 70, b: 70 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            wall: Color::Rgb { r: 60, g: 60, b: 80 },
            open: Color::Rgb { r: 255, g: 255, b: 255 },
            entrance: Color::Rgb { r: 40, g: 160, b: 60 },
            exit: Color::Rgb { r: 30, g: 100, b: 200 },
            marked: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            wall: Color::Black,
            open: Color::White,
            entrance: Color::Green,
            exit: Color::Blue,
            marked: Color::Red,
            success: Color::Green,
            error: Color::Red,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Fill color for a maze cell
    pub fn cell_color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Wall => self.wall,
            Cell::Open => self.open,
            Cell::Entrance => self.entrance,
            Cell::Exit => self.exit,
            Cell::Marked => self.marked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_kind_is_distinct() {
        for name in [ThemeName::Dark, ThemeName::Light, ThemeName::HighContrast] {
            let theme = Theme::from_name(name);
            let colors: Vec<Color> = [Cell::Wall, Cell::Open, Cell::Entrance, Cell::Exit, Cell::Marked]
                .into_iter()
                .map(|c| theme.cell_color(c))
                .collect();
            for (i, a) in colors.iter().enumerate() {
                for b in &colors[i + 1..] {
                    assert_ne!(a, b, "{:?} theme reuses a cell color", name);
                }
            }
        }
    }
}
