// Roster store: the ordered, in-memory list of students for one session.
// It is owned by whoever runs the menu loop and never shared.

use crate::model::Student;

/// Ordered collection of students. Insertion order is kept for listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

/// Result of a removal request. None of these abort the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The roster was empty, nothing to look at.
    Empty,
    /// No student carried the requested id.
    NotFound,
    /// Number of students dropped (duplicates share an id).
    Removed(usize),
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Append a student. Ids are not checked for uniqueness.
    pub fn add(&mut self, student: Student) {
        if log::log_enabled!(log::Level::Debug) {
            match debug_record(&student) {
                Ok(record) => log::debug!("adding student: {}", record),
                Err(e) => log::warn!("could not serialize student {}: {}", student.id, e),
            }
        }
        self.students.push(student);
    }

    /// Drop every student whose id matches `id`.
    pub fn remove(&mut self, id: i64) -> RemoveOutcome {
        if self.students.is_empty() {
            return RemoveOutcome::Empty;
        }
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        let removed = before - self.students.len();
        log::debug!("remove id={} dropped {} student(s)", id, removed);
        if removed == 0 {
            RemoveOutcome::NotFound
        } else {
            RemoveOutcome::Removed(removed)
        }
    }

    /// Current students in insertion order, or `None` when there are none.
    pub fn list(&self) -> Option<&[Student]> {
        if self.students.is_empty() {
            None
        } else {
            Some(&self.students)
        }
    }
}

/// JSON form of a student used in debug logs.
fn debug_record(student: &Student) -> serde_json::Result<String> {
    serde_json::to_string(student)
}
