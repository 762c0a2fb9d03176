//! HTTP transport for the student service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` - `{ "message": "Student Management API" }`
//! - `GET /health` - `{ "ok": true, "total": N }`
//! - `GET /students` - list all; with `?name=..` look up by name instead
//! - `GET /students/:id` - get by id
//! - `POST /students/:id` - create from a full body
//! - `PATCH /students/:id` (or `PUT`) - partial update
//! - `DELETE /students/:id` - delete
//!
//! Errors are returned as `{ "error": "<message>" }` with the status from
//! `HandlerError::status_code`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_registry::{service, InMemoryStudentStore, StudentService};
//!
//! let service = Arc::new(StudentService::new(InMemoryStudentStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(service.clone());
//!
//! // Or serve directly
//! service::serve(service, "127.0.0.1:8000".parse()?).await?;
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::error::HandlerError;
use super::student_service::StudentService;
use crate::store::StudentStore;
use crate::student::StudentId;

/// Query string accepted by `GET /students`.
#[derive(Debug, Default, Deserialize)]
pub struct StudentQuery {
    pub name: Option<String>,
}

/// Build an axum `Router` serving the given student service.
pub fn router<S: StudentStore + 'static>(service: Arc<StudentService<S>>) -> Router {
    Router::new()
        .route("/", get(index_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .route("/students", get(list_handler::<S>))
        .route(
            "/students/:id",
            get(get_handler::<S>)
                .post(create_handler::<S>)
                .patch(update_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(service)
}

/// Serve the student service over HTTP at `addr`.
pub async fn serve<S: StudentStore + 'static>(
    service: Arc<StudentService<S>>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn index_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
) -> Response {
    Json(service.index()).into_response()
}

async fn health_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
) -> Response {
    match service.count() {
        Ok(total) => Json(json!({ "ok": true, "total": total })).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /students` lists everything unless a `name` query parameter is
/// present, in which case it becomes a name lookup.
async fn list_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
    Query(query): Query<StudentQuery>,
) -> Response {
    let result = match query.name {
        Some(name) => service.get_by_name(Some(&name)).map(|s| Json(s).into_response()),
        None => service.list().map(|l| Json(l).into_response()),
    };
    result.unwrap_or_else(error_response)
}

async fn get_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
    Path(id): Path<StudentId>,
) -> Response {
    match service.get(id) {
        Ok(student) => Json(student).into_response(),
        Err(e) => error_response(e),
    }
}

async fn create_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
    Path(id): Path<StudentId>,
    body: Bytes,
) -> Response {
    match decode_body(&body).and_then(|student| service.create(id, student)) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
    Path(id): Path<StudentId>,
    body: Bytes,
) -> Response {
    match decode_body(&body).and_then(|patch| service.update(id, patch)) {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_handler<S: StudentStore + 'static>(
    State(service): State<Arc<StudentService<S>>>,
    Path(id): Path<StudentId>,
) -> Response {
    match service.delete(id) {
        Ok(deleted) => Json(deleted).into_response(),
        Err(e) => error_response(e),
    }
}

/// Bodies are read as raw bytes so that bad JSON and a missing
/// `Content-Type` both surface as `DecodeFailed`.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HandlerError> {
    Ok(serde_json::from_slice(body)?)
}

fn error_response(e: HandlerError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({ "error": e.to_string() });
    (status, Json(body)).into_response()
}
