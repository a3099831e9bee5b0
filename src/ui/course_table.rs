use crate::app::state::*;
use crate::course::credits::format_credits;
use crate::course::gpa::counts;
use crate::course::{Course, Grade};
use crate::ui::theme::Theme;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

const MARKER_WIDTH: u16 = 2;
const INDEX_WIDTH: u16 = 4;
const CREDITS_WIDTH: u16 = 12;
const REMOVE_WIDTH: u16 = 3;
const COLUMN_SPACING: u16 = 1;

/// Horizontal offset of the credits column inside the table block.
const CREDITS_X: u16 = MARKER_WIDTH + COLUMN_SPACING + INDEX_WIDTH + COLUMN_SPACING;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let show_points = state.config.ui.show_grade_points;
    let can_remove = state.courses.can_remove();
    let grade_width: u16 = if show_points { 10 } else { 4 };

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("#"),
        Cell::from("Credits"),
        Cell::from("Grade"),
        Cell::from(""),
    ])
    .style(Theme::column_header());

    let rows: Vec<Row> = state
        .courses
        .courses()
        .iter()
        .enumerate()
        .map(|(idx, course)| course_row(state, idx, course, show_points, can_remove))
        .collect();

    let block = Block::default()
        .title(format!(" Courses ({}) ", state.courses.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(area);

    let table = Table::new(
        rows,
        [
            Constraint::Length(MARKER_WIDTH),
            Constraint::Length(INDEX_WIDTH),
            Constraint::Length(CREDITS_WIDTH),
            Constraint::Length(grade_width),
            Constraint::Length(REMOVE_WIDTH),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(COLUMN_SPACING)
    .flex(Flex::Start)
    .highlight_spacing(HighlightSpacing::Never)
    .row_highlight_style(Theme::row_selected());

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);

    if let Some(ref editor) = state.editor {
        if inner.width == 0 || inner.height < 2 {
            return;
        }
        // Header occupies the first inner line
        let visible_row = state.selected.saturating_sub(table_state.offset()) as u16;
        let typed = UnicodeWidthStr::width(&editor.text[..editor.cursor]) as u16;
        let cursor_x = inner.x + CREDITS_X + typed;
        let cursor_y = inner.y + 1 + visible_row;
        frame.set_cursor_position((
            cursor_x.min(inner.right() - 1),
            cursor_y.min(inner.bottom() - 1),
        ));
    }
}

fn course_row<'a>(
    state: &'a AppState,
    idx: usize,
    course: &'a Course,
    show_points: bool,
    can_remove: bool,
) -> Row<'a> {
    let selected = idx == state.selected;
    let editing = state
        .editor
        .as_ref()
        .filter(|e| e.course_id == course.id);

    let marker = if selected { "▶" } else { "" };

    let credits_text = match editing {
        Some(editor) => editor.text.clone(),
        None => format_credits(course.credits),
    };
    let credits_style = if editing.is_some() {
        Theme::cell_editing()
    } else if selected && state.focus == FocusColumn::Credits {
        Theme::cell_focused()
    } else if !counts(course.credits) {
        Theme::cell_excluded()
    } else {
        Theme::cell_normal()
    };

    let grade_style = if selected && state.focus == FocusColumn::Grade {
        Theme::cell_focused()
    } else {
        Theme::cell_normal()
    };

    let remove = if can_remove { "✕" } else { "" };

    Row::new(vec![
        Cell::from(marker),
        Cell::from(format!("{}", idx + 1)).style(Theme::muted()),
        Cell::from(credits_text).style(credits_style),
        Cell::from(grade_text(&course.grade, show_points)).style(grade_style),
        Cell::from(remove).style(Theme::remove_marker()),
    ])
}

pub fn grade_text(grade: &Grade, show_points: bool) -> String {
    match grade {
        Grade::Letter(letter) if show_points => letter.label(),
        Grade::Letter(letter) => letter.as_str().to_string(),
        Grade::Unrecognized(raw) => format!("?{}", raw),
    }
}
