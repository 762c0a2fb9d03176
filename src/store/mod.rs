//! Record store - authoritative keeper of student records.
//!
//! The store enforces id uniqueness and existence, and performs the
//! partial-update merge. It never logs: every failure comes back to the
//! caller as a `StoreError`, and a failed call leaves the store unchanged.
//!
//! ## Example
//!
//! ```
//! use student_registry::{InMemoryStudentStore, NewStudent, StudentPatch, StudentStore};
//!
//! let store = InMemoryStudentStore::new();
//! store.create(1, NewStudent::new("John Doe", 20, "john@example.com"))?;
//! let updated = store.update(1, &StudentPatch::new().age(21))?;
//! assert_eq!(updated.age, 21);
//! # Ok::<(), student_registry::StoreError>(())
//! ```

mod in_memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::student::{NewStudent, StudentId, StudentPatch, StudentRecord};

pub use in_memory::InMemoryStudentStore;

/// Every record in the store together with the record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentList {
    pub total: usize,
    pub students: Vec<StudentRecord>,
}

/// Abstract CRUD storage for student records.
///
/// Reads return owned copies; callers never hold a reference into the store.
pub trait StudentStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if `id` is taken.
    fn create(&self, id: StudentId, student: NewStudent) -> Result<StudentRecord, StoreError>;

    /// Fetch a record by id.
    fn get(&self, id: StudentId) -> Result<StudentRecord, StoreError>;

    /// First record, in iteration order, whose name matches case-insensitively.
    fn get_by_name(&self, name: &str) -> Result<StudentRecord, StoreError>;

    /// All records plus the count. Never fails on an empty store.
    fn list(&self) -> Result<StudentList, StoreError>;

    /// Merge the present fields of `patch` into the record and return it.
    fn update(&self, id: StudentId, patch: &StudentPatch) -> Result<StudentRecord, StoreError>;

    /// Remove a record, returning what was removed.
    fn delete(&self, id: StudentId) -> Result<StudentRecord, StoreError>;

    /// Number of stored records, without copying them.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id.
    NotFound(StudentId),
    /// No record with this name.
    NameNotFound(String),
    /// Create was called with an id that is already present.
    AlreadyExists(StudentId),
    /// Malformed input, rejected before the mapping is touched.
    InvalidArgument(String),
    /// A writer panicked while holding the lock.
    LockPoisoned(&'static str),
}

impl StoreError {
    /// True for both id and name misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::NameNotFound(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "student {} not found", id),
            StoreError::NameNotFound(name) => write!(f, "student named '{}' not found", name),
            StoreError::AlreadyExists(id) => write!(f, "student with id {} already exists", id),
            StoreError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "student store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
