use crate::course::{CourseId, CourseUpdate};

/// A request to change the course list or leave the application.
///
/// Handlers only produce actions; `AppState::apply` is the single place the
/// course list is mutated and the GPA recomputed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddCourse,
    UpdateCourse { id: CourseId, update: CourseUpdate },
    RemoveCourse { id: CourseId },
    Quit,
}
