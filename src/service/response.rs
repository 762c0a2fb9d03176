//! Response payloads returned by the student handlers.
//!
//! These have fixed shapes and are built from store results, so the wire
//! format does not follow the store's internal types around.

use serde::{Deserialize, Serialize};

use crate::store::StudentList;
use crate::student::{StudentId, StudentRecord};

pub const CREATED_MESSAGE: &str = "Student created successfully";
pub const UPDATED_MESSAGE: &str = "Student updated successfully";
pub const DELETED_MESSAGE: &str = "Student deleted successfully";
pub const INDEX_MESSAGE: &str = "Student Management API";

/// A single student as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBody {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<StudentRecord> for StudentBody {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            age: record.age,
            email: record.email,
        }
    }
}

/// `{ "total": N, "students": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub total: usize,
    pub students: Vec<StudentBody>,
}

impl From<StudentList> for StudentListResponse {
    fn from(list: StudentList) -> Self {
        Self {
            total: list.total,
            students: list.students.into_iter().map(StudentBody::from).collect(),
        }
    }
}

/// Echo of the record a mutation touched, with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentMutationResponse {
    pub message: String,
    pub student: StudentBody,
}

impl StudentMutationResponse {
    pub fn new(message: &str, record: StudentRecord) -> Self {
        Self {
            message: message.to_string(),
            student: record.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
