//! Terminal User Interface
//!
//! Green-phosphor MU-TH-UR console using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::CrewStatus;
use crate::mainframe::Tone;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the terminal
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub system: Color,
    pub border: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::Green,
            accent: Color::LightGreen,
            alert: Color::Red,
            success: Color::LightGreen,
            warning: Color::Yellow,
            info: Color::Cyan,
            system: Color::Green,
            border: Color::Green,
            dim: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for a line of output
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Input => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Tone::Output => Style::default().fg(self.fg),
            Tone::Error => Style::default().fg(self.alert),
            Tone::Success => Style::default().fg(self.success),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Info => Style::default().fg(self.info),
            Tone::System => Style::default().fg(self.system).add_modifier(Modifier::BOLD),
        }
    }
}

/// Crew hints on the login screen highlight the active crew
pub fn crew_status_color(status: CrewStatus) -> Color {
    match status {
        CrewStatus::Active => Color::LightGreen,
        _ => Color::DarkGray,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Smaller logo for header
pub const SMALL_LOGO: &str = " MU-TH-UR 6000 ";

/// Terminal screen: header, scrollback, input line
pub fn create_terminal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Output
            Constraint::Length(3), // Input
        ])
        .split(area)
        .to_vec()
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(200, 50, area), area);
    }

    #[test]
    fn only_active_crew_is_highlighted() {
        assert_eq!(crew_status_color(CrewStatus::Active), Color::LightGreen);
        assert_eq!(crew_status_color(CrewStatus::Deactivated), Color::DarkGray);
    }
}
