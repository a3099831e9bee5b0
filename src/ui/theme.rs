use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn column_header() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Color::Rgb(30, 40, 60))
    }

    pub fn cell_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn cell_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cell_editing() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Courses left out of the average.
    pub fn cell_excluded() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn remove_marker() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn gpa_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn gpa_value() -> Style {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
