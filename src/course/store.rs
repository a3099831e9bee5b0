//! The ordered course list and its three mutations.
//!
//! Every mutation rebuilds the backing vector instead of editing records in
//! place, so a snapshot borrowed before a mutation is never observed half
//! updated. Unknown ids and attempts to drop the final course are silent
//! no-ops; the boolean results only let callers log or hint at them.

use super::grade::{Grade, Letter};
use tracing::debug;

pub type CourseId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    /// Credit weight. Not validated: may be NaN or non-positive.
    pub credits: f64,
    pub grade: Grade,
}

impl Course {
    fn with_update(&self, update: &CourseUpdate) -> Course {
        match update {
            CourseUpdate::Credits(credits) => Course {
                credits: *credits,
                ..self.clone()
            },
            CourseUpdate::Grade(grade) => Course {
                grade: grade.clone(),
                ..self.clone()
            },
        }
    }
}

/// A single-field edit to one course.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseUpdate {
    Credits(f64),
    Grade(Grade),
}

/// Field values given to the seed course and every added course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseDefaults {
    pub credits: f64,
    pub grade: Letter,
}

impl Default for CourseDefaults {
    fn default() -> Self {
        Self {
            credits: 3.0,
            grade: Letter::A,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CourseList {
    courses: Vec<Course>,
    defaults: CourseDefaults,
    /// Highest id ever handed out this session.
    high_water: CourseId,
}

impl CourseList {
    /// A list holding one seed course built from `defaults`.
    pub fn seeded(defaults: CourseDefaults) -> Self {
        let mut list = Self::from_courses(defaults, Vec::new());
        list.add_course();
        list
    }

    /// A list holding exactly `courses`, in order. Ids are taken as given.
    pub fn from_courses(defaults: CourseDefaults, courses: Vec<Course>) -> Self {
        let high_water = courses.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            courses,
            defaults,
            high_water,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Removal is only offered while more than one course exists.
    pub fn can_remove(&self) -> bool {
        self.courses.len() > 1
    }

    /// Append a course with default fields and return its id.
    ///
    /// The id is one past the largest id currently in the list (1 for an
    /// empty list), bumped past any id already handed out so removed ids are
    /// never issued again.
    pub fn add_course(&mut self) -> CourseId {
        let max_existing = self.courses.iter().map(|c| c.id).max().unwrap_or(0);
        let id = max_existing.max(self.high_water) + 1;
        self.high_water = id;

        let mut next = Vec::with_capacity(self.courses.len() + 1);
        next.extend(self.courses.iter().cloned());
        next.push(Course {
            id,
            credits: self.defaults.credits,
            grade: Grade::Letter(self.defaults.grade),
        });
        self.courses = next;

        debug!(id, count = self.courses.len(), "course added");
        id
    }

    /// Replace the course matching `id` with an edited copy. Returns whether
    /// a course matched; the list is untouched otherwise.
    pub fn update_course(&mut self, id: CourseId, update: CourseUpdate) -> bool {
        if self.get(id).is_none() {
            debug!(id, "update ignored: no such course");
            return false;
        }

        self.courses = self
            .courses
            .iter()
            .map(|c| if c.id == id { c.with_update(&update) } else { c.clone() })
            .collect();

        debug!(id, ?update, "course updated");
        true
    }

    /// Remove the course matching `id`, unless it is the last one left.
    /// Returns whether a course was removed.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        if !self.can_remove() {
            debug!(id, "remove ignored: last course");
            return false;
        }
        if self.get(id).is_none() {
            debug!(id, "remove ignored: no such course");
            return false;
        }

        self.courses = self.courses.iter().filter(|c| c.id != id).cloned().collect();

        debug!(id, count = self.courses.len(), "course removed");
        true
    }
}
