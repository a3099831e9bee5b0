//! Course list model and the GPA reduction over it.
//!
//! Everything in here is free of terminal and I/O concerns: the store owns the
//! ordered course records, the calculator folds a snapshot of them into a
//! single [`Gpa`], and the grade table maps letters to four-point values.

pub mod credits;
pub mod gpa;
pub mod grade;
pub mod store;

pub use gpa::Gpa;
pub use grade::{Grade, Letter};
pub use store::{Course, CourseDefaults, CourseId, CourseList, CourseUpdate};
