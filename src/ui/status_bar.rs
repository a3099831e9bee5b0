use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = key_hints(state);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", hints), Theme::status_hint()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

fn key_hints(state: &AppState) -> &'static str {
    if state.editor.is_some() {
        return "⏎:done Esc:cancel";
    }
    match state.focus {
        FocusColumn::Credits => "a:add d:del ⏎:edit +/-:step q:quit",
        FocusColumn::Grade => "a:add d:del ←/→:grade q:quit",
    }
}
