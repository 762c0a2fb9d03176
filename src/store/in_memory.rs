//! InMemoryStudentStore - BTreeMap-backed student store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{StoreError, StudentList, StudentStore};
use crate::student::{NewStudent, StudentId, StudentPatch, StudentRecord};

/// In-memory student store.
///
/// One `RwLock` guards the whole mapping, so every call is atomic with
/// respect to every other call. Iteration is in ascending id order.
/// Clone-friendly via Arc; clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryStudentStore {
    storage: Arc<RwLock<BTreeMap<StudentId, StudentRecord>>>,
}

impl InMemoryStudentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`. A later record replaces an earlier
    /// one with the same id.
    pub fn with_records(records: impl IntoIterator<Item = StudentRecord>) -> Self {
        let storage = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// The three students the service ships with when started in demo mode.
    pub fn demo_records() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new(1, "John Doe", 20, "john@example.com"),
            StudentRecord::new(2, "Jane Smith", 21, "jane@example.com"),
            StudentRecord::new(3, "Bob Johnson", 19, "bob@example.com"),
        ]
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, BTreeMap<StudentId, StudentRecord>>, StoreError> {
        self.storage
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<StudentId, StudentRecord>>, StoreError> {
        self.storage
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

impl StudentStore for InMemoryStudentStore {
    fn create(&self, id: StudentId, student: NewStudent) -> Result<StudentRecord, StoreError> {
        let mut storage = self.write("create")?;

        if storage.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }

        let record = student.into_record(id);
        storage.insert(id, record.clone());
        Ok(record)
    }

    fn get(&self, id: StudentId) -> Result<StudentRecord, StoreError> {
        let storage = self.read("get")?;
        storage.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn get_by_name(&self, name: &str) -> Result<StudentRecord, StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument("name must not be empty".into()));
        }

        let storage = self.read("get_by_name")?;
        storage
            .values()
            .find(|record| record.name_matches(name))
            .cloned()
            .ok_or_else(|| StoreError::NameNotFound(name.to_string()))
    }

    fn list(&self) -> Result<StudentList, StoreError> {
        let storage = self.read("list")?;
        let students: Vec<StudentRecord> = storage.values().cloned().collect();
        Ok(StudentList {
            total: students.len(),
            students,
        })
    }

    fn update(&self, id: StudentId, patch: &StudentPatch) -> Result<StudentRecord, StoreError> {
        let mut storage = self.write("update")?;
        let record = storage.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    fn delete(&self, id: StudentId) -> Result<StudentRecord, StoreError> {
        let mut storage = self.write("delete")?;
        storage.remove(&id).ok_or(StoreError::NotFound(id))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read("len")?.len())
    }
}
