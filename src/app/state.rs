use crate::app::action::Action;
use crate::config::AppConfig;
use crate::course::credits::format_credits;
use crate::course::gpa::{self, Tally};
use crate::course::{Course, CourseId, CourseList, Gpa};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Text being typed into a course's credits cell.
#[derive(Debug)]
pub struct CreditsEditor {
    pub course_id: CourseId,
    pub text: String,
    pub cursor: usize,
    /// Credits before editing started, restored on cancel.
    pub original: f64,
}

impl CreditsEditor {
    pub fn new(course_id: CourseId, original: f64) -> Self {
        let text = format_credits(original);
        let cursor = text.len();
        Self {
            course_id,
            text,
            cursor,
            original,
        }
    }

    /// Start from an empty cell, replacing whatever was shown.
    pub fn blank(course_id: CourseId, original: f64) -> Self {
        Self {
            course_id,
            text: String::new(),
            cursor: 0,
            original,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusColumn {
    Credits,
    Grade,
}

pub struct AppState {
    pub config: AppConfig,
    pub courses: CourseList,
    /// Always the result of the last recompute over `courses`.
    pub gpa: Gpa,
    pub tally: Tally,
    pub selected: usize,
    pub focus: FocusColumn,
    pub editor: Option<CreditsEditor>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let courses = CourseList::seeded(config.course_defaults());
        let mut state = Self {
            config,
            courses,
            gpa: Gpa::default(),
            tally: Tally::default(),
            selected: 0,
            focus: FocusColumn::Credits,
            editor: None,
            should_quit: false,
            dirty: true,
            status_message: None,
        };
        state.recompute();
        state
    }

    /// Apply one action, then recompute the GPA before returning.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddCourse => {
                self.courses.add_course();
                self.selected = self.courses.len() - 1;
            }
            Action::UpdateCourse { id, update } => {
                self.courses.update_course(id, update);
            }
            Action::RemoveCourse { id } => {
                if self.courses.remove_course(id) {
                    if self.editor.as_ref().map(|e| e.course_id) == Some(id) {
                        self.editor = None;
                    }
                    self.selected = self.selected.min(self.courses.len().saturating_sub(1));
                } else if !self.courses.can_remove() {
                    warn!(id, "refusing to remove the last course");
                    self.set_status("At least one course is required".to_string());
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.gpa = gpa::calculate(self.courses.courses());
        self.tally = gpa::tally(self.courses.courses());
        self.dirty = true;
        debug!(gpa = %self.gpa, counted = self.tally.counted, "gpa recomputed");
    }

    pub fn gpa_text(&self) -> String {
        self.gpa.display(self.config.gpa.normalize_zero)
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.courses.courses().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.courses.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.dirty = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.courses.len().saturating_sub(1);
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusColumn::Credits => FocusColumn::Grade,
            FocusColumn::Grade => FocusColumn::Credits,
        };
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some((text, Instant::now()));
        self.dirty = true;
    }

    /// Drop the status message once it is older than `timeout`.
    pub fn expire_status(&mut self, now: Instant, timeout: Duration) {
        if let Some((_, set_at)) = &self.status_message {
            if now.saturating_duration_since(*set_at) >= timeout {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        let total = self.courses.len();
        format!(
            "Courses: {} | Counted: {}/{} | Credits: {}",
            total,
            self.tally.counted,
            total,
            format_credits(self.tally.total_credits)
        )
    }
}
