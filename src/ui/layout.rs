use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub course_table: Rect,
    pub gpa_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: course table | gap | GPA panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(36),    // Course table
            Constraint::Length(26), // GPA panel
        ])
        .split(content);

    AppLayout {
        header,
        course_table: h_chunks[0],
        gpa_panel: h_chunks[1],
        status_bar,
    }
}
