//! Student Service - request handlers over a `StudentStore`.
//!
//! This module provides `StudentService<S>`, which translates validated
//! requests into store calls and maps store outcomes to response payloads
//! and status codes. With the `http` feature it is also exposed over axum.
//!
//! ## Quick Start
//!
//! ```
//! use student_registry::{InMemoryStudentStore, NewStudent, StudentService};
//!
//! let service = StudentService::new(InMemoryStudentStore::new());
//! service.create(1, NewStudent::new("John Doe", 20, "john@example.com")).unwrap();
//!
//! let err = service.get(2).unwrap_err();
//! assert_eq!(err.status_code(), 404);
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
mod response;
mod student_service;

pub use error::HandlerError;
#[cfg(feature = "http")]
pub use http::{router, serve, StudentQuery};
pub use response::{
    MessageResponse, StudentBody, StudentListResponse, StudentMutationResponse, CREATED_MESSAGE,
    DELETED_MESSAGE, INDEX_MESSAGE, UPDATED_MESSAGE,
};
pub use student_service::{decode, StudentService};
