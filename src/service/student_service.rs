//! StudentService - adapts validated requests to store operations.
//!
//! `StudentService<S>` owns an injected store. Each method checks the
//! request shape the store does not check, runs exactly one store call, and
//! turns the outcome into a response payload or a `HandlerError`. Handlers
//! never mutate records themselves.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::error::HandlerError;
use super::response::{
    MessageResponse, StudentBody, StudentListResponse, StudentMutationResponse, CREATED_MESSAGE,
    DELETED_MESSAGE, INDEX_MESSAGE, UPDATED_MESSAGE,
};
use crate::store::StudentStore;
use crate::student::{NewStudent, StudentId, StudentPatch};

/// Decode a raw JSON body into a typed input struct.
pub fn decode<T: DeserializeOwned>(input: Value) -> Result<T, HandlerError> {
    Ok(serde_json::from_value(input)?)
}

/// Request handlers for student records.
///
/// Generic over `S`, the store type, so tests and the server can each
/// inject their own instance.
pub struct StudentService<S> {
    store: S,
}

impl<S: StudentStore> StudentService<S> {
    /// Create a new service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> MessageResponse {
        MessageResponse {
            message: INDEX_MESSAGE.to_string(),
        }
    }

    pub fn list(&self) -> Result<StudentListResponse, HandlerError> {
        let list = self.store.list()?;
        Ok(list.into())
    }

    pub fn get(&self, id: StudentId) -> Result<StudentBody, HandlerError> {
        let record = self.store.get(id).inspect_err(|e| log_rejected("get", e))?;
        Ok(record.into())
    }

    /// Look a student up by name. A missing or empty `name` is rejected
    /// before the store is consulted.
    pub fn get_by_name(&self, name: Option<&str>) -> Result<StudentBody, HandlerError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => {
                let err = HandlerError::InvalidArgument("name parameter is required".into());
                log_rejected("get_by_name", &err);
                return Err(err);
            }
        };

        let record = self
            .store
            .get_by_name(name)
            .inspect_err(|e| log_rejected("get_by_name", e))?;
        Ok(record.into())
    }

    pub fn create(
        &self,
        id: StudentId,
        student: NewStudent,
    ) -> Result<StudentMutationResponse, HandlerError> {
        if student.name.trim().is_empty() {
            let err = HandlerError::InvalidArgument("name must not be empty".into());
            log_rejected("create", &err);
            return Err(err);
        }

        let record = self
            .store
            .create(id, student)
            .inspect_err(|e| log_rejected("create", e))?;
        info!(id, name = %record.name, "student created");
        Ok(StudentMutationResponse::new(CREATED_MESSAGE, record))
    }

    /// Apply a partial update. Fields absent from `patch` keep their value.
    pub fn update(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> Result<StudentMutationResponse, HandlerError> {
        if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            let err = HandlerError::InvalidArgument("name must not be empty".into());
            log_rejected("update", &err);
            return Err(err);
        }

        let record = self
            .store
            .update(id, &patch)
            .inspect_err(|e| log_rejected("update", e))?;
        info!(id, "student updated");
        Ok(StudentMutationResponse::new(UPDATED_MESSAGE, record))
    }

    pub fn delete(&self, id: StudentId) -> Result<StudentMutationResponse, HandlerError> {
        let record = self
            .store
            .delete(id)
            .inspect_err(|e| log_rejected("delete", e))?;
        info!(id, "student deleted");
        Ok(StudentMutationResponse::new(DELETED_MESSAGE, record))
    }

    /// Number of stored students, for health reporting.
    pub fn count(&self) -> Result<usize, HandlerError> {
        Ok(self.store.len()?)
    }
}

fn log_rejected(operation: &str, err: &dyn std::fmt::Display) {
    warn!(operation, error = %err, "request rejected");
}
