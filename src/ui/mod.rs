mod course_table;
mod gpa_panel;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    course_table::render(frame, app_layout.course_table, state);
    gpa_panel::render(frame, app_layout.gpa_panel, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::Theme::border());

    let title = Paragraph::new(Line::from(Span::styled(
        "GPA Calculator",
        theme::Theme::header(),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::state::CreditsEditor;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_seed_state() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("GPA Calculator"));
        assert!(screen.contains("Courses (1)"));
        assert!(screen.contains("A (4.0)"));
        assert!(screen.contains("4.00"));
        // No remove marker with a single course
        assert!(!screen.contains('✕'));
    }

    #[test]
    fn test_render_shows_remove_marker_and_bare_zero() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Action::AddCourse);
        for id in [1, 2] {
            state.apply(Action::UpdateCourse {
                id,
                update: crate::course::CourseUpdate::Credits(0.0),
            });
        }
        let screen = draw(&state);
        assert!(screen.contains('✕'));
        assert!(screen.contains("2 course(s) excluded"));
        assert!(!screen.contains("0.00"));
    }

    #[test]
    fn test_render_while_editing() {
        let mut state = AppState::new(AppConfig::default());
        state.editor = Some(CreditsEditor::new(1, 3.0));
        let screen = draw(&state);
        assert!(screen.contains("Esc:cancel"));
    }
}
