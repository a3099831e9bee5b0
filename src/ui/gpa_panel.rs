use crate::app::state::AppState;
use crate::course::credits::format_credits;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" GPA ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let excluded = state.courses.len() - state.tally.counted;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Your Current GPA:", Theme::gpa_label())),
        Line::from(""),
        Line::from(Span::styled(state.gpa_text(), Theme::gpa_value())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} credits counted", format_credits(state.tally.total_credits)),
            Theme::muted(),
        )),
    ];
    if excluded > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} course(s) excluded", excluded),
            Theme::muted(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
