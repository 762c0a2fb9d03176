pub mod config;
pub mod service;
mod store;
mod student;

pub use config::ServerConfig;
pub use service::{HandlerError, StudentService};
pub use store::{InMemoryStudentStore, StoreError, StudentList, StudentStore};
pub use student::{NewStudent, StudentId, StudentPatch, StudentRecord};
