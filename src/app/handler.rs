use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::course::credits::parse_credits;
use crate::course::{CourseUpdate, Grade, Letter};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            let timeout = Duration::from_secs(state.config.ui.status_timeout_secs);
            state.expire_status(Instant::now(), timeout);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The credits editor captures all input while open
    if state.editor.is_some() {
        return handle_editor_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.select_first();
            vec![]
        }
        KeyCode::End => {
            state.select_last();
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Char('a') | KeyCode::Insert => vec![Action::AddCourse],
        KeyCode::Char('d') | KeyCode::Delete => match state.selected_course() {
            Some(course) => vec![Action::RemoveCourse { id: course.id }],
            None => vec![],
        },
        _ => match state.focus {
            FocusColumn::Credits => handle_credits_key(state, key),
            FocusColumn::Grade => handle_grade_key(state, key),
        },
    }
}

fn handle_credits_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(course) = state.selected_course() else {
        return vec![];
    };
    let (id, credits) = (course.id, course.credits);

    match key.code {
        KeyCode::Enter => {
            state.editor = Some(CreditsEditor::new(id, credits));
            vec![]
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            let mut editor = CreditsEditor::blank(id, credits);
            editor.insert_char(c);
            let value = parse_credits(&editor.text);
            state.editor = Some(editor);
            vec![Action::UpdateCourse {
                id,
                update: CourseUpdate::Credits(value),
            }]
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let base = if credits.is_finite() { credits } else { 0.0 };
            vec![Action::UpdateCourse {
                id,
                update: CourseUpdate::Credits(base + state.config.ui.credit_step),
            }]
        }
        KeyCode::Char('-') => {
            let min = state.config.ui.min_credits;
            // Typed values already at or below the floor are left alone
            if credits.is_finite() && credits <= min {
                return vec![];
            }
            let stepped = if credits.is_finite() {
                (credits - state.config.ui.credit_step).max(min)
            } else {
                min
            };
            vec![Action::UpdateCourse {
                id,
                update: CourseUpdate::Credits(stepped),
            }]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.focus = FocusColumn::Grade;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_grade_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(course) = state.selected_course() else {
        return vec![];
    };
    let id = course.id;
    let current = course.grade.letter();

    let next = match key.code {
        KeyCode::Right | KeyCode::Char('l') => current.map_or(Letter::A, Letter::next),
        KeyCode::Left | KeyCode::Char('h') => current.map_or(Letter::A, Letter::prev),
        // Uppercase letters jump straight to the plain grade (`B` selects B)
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            match Grade::parse(c.encode_utf8(&mut [0; 4])).letter() {
                Some(letter) => letter,
                None => return vec![],
            }
        }
        _ => return vec![],
    };

    if current == Some(next) {
        return vec![];
    }
    vec![Action::UpdateCourse {
        id,
        update: CourseUpdate::Grade(Grade::Letter(next)),
    }]
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(editor) = state.editor.as_mut() else {
        return vec![];
    };
    let id = editor.course_id;

    match key.code {
        KeyCode::Enter => {
            state.editor = None;
            return vec![];
        }
        KeyCode::Esc => {
            let original = editor.original;
            state.editor = None;
            return vec![Action::UpdateCourse {
                id,
                update: CourseUpdate::Credits(original),
            }];
        }
        KeyCode::Left => {
            editor.move_left();
            return vec![];
        }
        KeyCode::Right => {
            editor.move_right();
            return vec![];
        }
        KeyCode::Home => {
            editor.move_home();
            return vec![];
        }
        KeyCode::End => {
            editor.move_end();
            return vec![];
        }
        KeyCode::Backspace => editor.delete_back(),
        KeyCode::Delete => editor.delete_forward(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.insert_char(c)
        }
        _ => return vec![],
    }

    // Every edit is pushed to the list immediately so the GPA tracks typing.
    vec![Action::UpdateCourse {
        id,
        update: CourseUpdate::Credits(parse_credits(&editor.text)),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::course::Gpa;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        press_with(state, code, KeyModifiers::NONE);
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers)));
        for action in handle_event(state, event) {
            state.apply(action);
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_then_edit_second_course() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        assert_eq!(s.courses.len(), 2);
        assert_eq!(s.selected, 1);

        // Credits: retype as 4
        type_text(&mut s, "4");
        press(&mut s, KeyCode::Enter);
        assert!(s.editor.is_none());

        // Grade: A -> A- -> B+ -> B
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Right);

        assert_eq!(s.courses.courses()[1].credits, 4.0);
        assert_eq!(s.courses.courses()[1].grade, Grade::Letter(Letter::B));
        assert_eq!(s.gpa_text(), "3.43");
    }

    #[test]
    fn test_gpa_tracks_each_keystroke() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Tab);
        press_with(&mut s, KeyCode::Char('C'), KeyModifiers::SHIFT);
        press(&mut s, KeyCode::Tab);

        press(&mut s, KeyCode::Char('1'));
        // (3*4 + 1*2) / 4
        assert_eq!(s.gpa_text(), "3.50");
        press(&mut s, KeyCode::Char('2'));
        // (3*4 + 12*2) / 15
        assert_eq!(s.gpa_text(), "2.40");
        press(&mut s, KeyCode::Backspace);
        assert_eq!(s.gpa_text(), "3.50");
    }

    #[test]
    fn test_invalid_credit_text_excludes_course() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Backspace);
        assert!(s.courses.courses()[0].credits.is_nan());
        assert_eq!(s.gpa, Gpa::NoCredits);
        assert_eq!(s.gpa_text(), "0");

        type_text(&mut s, "x");
        assert!(s.courses.courses()[0].credits.is_nan());
        press(&mut s, KeyCode::Home);
        type_text(&mut s, "2");
        assert_eq!(s.courses.courses()[0].credits, 2.0);
        assert_eq!(s.gpa_text(), "4.00");
    }

    #[test]
    fn test_escape_restores_original_credits() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        type_text(&mut s, "5");
        assert_eq!(s.courses.courses()[0].credits, 35.0);
        press(&mut s, KeyCode::Esc);
        assert!(s.editor.is_none());
        assert_eq!(s.courses.courses()[0].credits, 3.0);
    }

    #[test]
    fn test_negative_credits_exclude_course() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Tab);
        press_with(&mut s, KeyCode::Char('C'), KeyModifiers::SHIFT);
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Backspace);
        type_text(&mut s, "-1");
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.courses.courses()[0].credits, -1.0);
        assert_eq!(s.gpa_text(), "2.00");
    }

    #[test]
    fn test_remove_selected_course() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Char('d'));
        let ids: Vec<_> = s.courses.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_cannot_remove_last_course() {
        let mut s = state();
        press(&mut s, KeyCode::Delete);
        assert_eq!(s.courses.len(), 1);
        assert!(s.status_message.is_some());
    }

    #[test]
    fn test_credit_stepping() {
        let mut s = state();
        press(&mut s, KeyCode::Char('+'));
        assert_eq!(s.courses.courses()[0].credits, 3.5);
        for _ in 0..10 {
            press(&mut s, KeyCode::Char('-'));
        }
        assert_eq!(s.courses.courses()[0].credits, 1.0);
    }

    #[test]
    fn test_step_down_leaves_typed_value_below_floor() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Backspace);
        type_text(&mut s, "0.5");
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('-'));
        assert_eq!(s.courses.courses()[0].credits, 0.5);
        assert_eq!(s.gpa_text(), "4.00");
    }

    #[test]
    fn test_uppercase_shortcut_ignores_unknown_letters() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        press_with(&mut s, KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(s.courses.courses()[0].grade, Grade::Letter(Letter::A));
        press_with(&mut s, KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(s.courses.courses()[0].grade, Grade::Letter(Letter::B));
        assert_eq!(s.gpa_text(), "3.00");
    }

    #[test]
    fn test_grade_selector_clamps() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Left);
        assert_eq!(s.courses.courses()[0].grade, Grade::Letter(Letter::A));
        for _ in 0..20 {
            press(&mut s, KeyCode::Char('l'));
        }
        assert_eq!(s.courses.courses()[0].grade, Grade::Letter(Letter::F));
        assert_eq!(s.gpa_text(), "0.00");
    }

    #[test]
    fn test_editor_captures_navigation_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Char('q'));
        assert!(!s.should_quit);
        assert!(s.courses.courses()[1].credits.is_finite());
        press(&mut s, KeyCode::Esc);
        press(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        press_with(&mut s, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(s.should_quit);
    }

    #[test]
    fn test_tick_without_status_is_noop() {
        let mut s = state();
        s.dirty = false;
        let actions = handle_event(&mut s, AppEvent::Tick);
        assert!(actions.is_empty());
        assert!(!s.dirty);
    }
}
