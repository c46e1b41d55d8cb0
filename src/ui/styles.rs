use crate::domain::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Accent color for each timer mode
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Rgb(74, 144, 217),
        Mode::ShortBreak => Color::Rgb(45, 175, 125),
        Mode::LongBreak => Color::Rgb(217, 74, 74),
    }
}

/// Large clock text style
pub fn clock_style(mode: Mode) -> Style {
    Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Unfilled part of the progress ring
pub fn track_color() -> Color {
    Color::DarkGray
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Pending task style
pub fn pending_style() -> Style {
    Style::default().fg(Color::Rgb(255, 165, 0))
}

/// Current task marker style
pub fn current_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}
