//! Student records and the inputs that create or patch them.
//!
//! `NewStudent` carries the full field set required to create a record.
//! `StudentPatch` is sparse: every field is an `Option`, and only `Some`
//! fields are written when the patch is applied. A field sent as `""` or `0`
//! is `Some` and therefore applied; a field left out of the body (or sent as
//! `null`) is `None` and leaves the stored value alone.
//!
//! ## Example
//!
//! ```
//! use student_registry::{StudentPatch, StudentRecord};
//!
//! let mut record = StudentRecord::new(1, "John Doe", 20, "john@example.com");
//! let patch = StudentPatch::new().age(21);
//! patch.apply_to(&mut record);
//!
//! assert_eq!(record.age, 21);
//! assert_eq!(record.name, "John Doe");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a student record. Supplied by the caller on create.
pub type StudentId = i64;

/// A stored student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl StudentRecord {
    pub fn new(id: StudentId, name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Case-insensitive, whole-string comparison against `name`.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Full field set for creating a student. The id travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Attach an id, producing the record that will be stored.
    pub fn into_record(self, id: StudentId) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

/// Sparse update for an existing student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl StudentPatch {
    /// An empty patch. Applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }

    /// Overwrite each present field on `record`. The id is never touched.
    pub fn apply_to(&self, record: &mut StudentRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
    }
}
