//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::{json, Value};
use student_registry::{service, InMemoryStudentStore, StudentService};

fn demo_service() -> Arc<StudentService<InMemoryStudentStore>> {
    Arc::new(StudentService::new(InMemoryStudentStore::with_records(
        InMemoryStudentStore::demo_records(),
    )))
}

/// Bind to port 0 and return the actual address.
async fn start_server(service: Arc<StudentService<InMemoryStudentStore>>) -> String {
    let app = service::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn index_and_health() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Student Management API" }));

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true, "total": 3 }));
}

#[tokio::test]
async fn list_all_students() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/students")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["total"], 3);
    let students = body["students"].as_array().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(
        students[0],
        json!({ "id": 1, "name": "John Doe", "age": 20, "email": "john@example.com" })
    );
}

#[tokio::test]
async fn get_by_id_and_missing_id() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/students/2")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Jane Smith");

    let resp = client.get(format!("{base}/students/99")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "student 99 not found");

    let resp = client.get(format!("{base}/students/abc")).send().await.unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn search_by_name() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/students?name=jane%20smith"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 2);

    let resp = client
        .get(format!("{base}/students?name=nobody"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("{base}/students?name="))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_update_delete_roundtrip() {
    let base = start_server(Arc::new(StudentService::new(InMemoryStudentStore::new()))).await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(format!("{base}/students/1"))
        .json(&json!({ "name": "John Doe", "age": 20, "email": "john@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student created successfully");
    assert_eq!(body["student"]["id"], 1);

    // Duplicate
    let resp = client
        .post(format!("{base}/students/1"))
        .json(&json!({ "name": "Other", "age": 50, "email": "other@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    // Partial update
    let resp = client
        .patch(format!("{base}/students/1"))
        .json(&json!({ "age": 21 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["student"],
        json!({ "id": 1, "name": "John Doe", "age": 21, "email": "john@example.com" })
    );

    // PUT behaves as a partial update too
    let resp = client
        .put(format!("{base}/students/1"))
        .json(&json!({ "email": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["student"]["email"], "");
    assert_eq!(body["student"]["age"], 21);

    // Delete
    let resp = client
        .delete(format!("{base}/students/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student deleted successfully");
    assert_eq!(body["student"]["name"], "John Doe");

    let resp = client.get(format!("{base}/students/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client.get(format!("{base}/students")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "total": 0, "students": [] }));
}

#[tokio::test]
async fn mutations_on_missing_ids_are_not_found() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/students/42"))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/students/42"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let base = start_server(demo_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/students/10"))
        .json(&json!({ "name": "Missing Fields" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("decode failed"));

    let resp = client
        .post(format!("{base}/students/10"))
        .json(&json!({ "name": "", "age": 20, "email": "x@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .patch(format!("{base}/students/1"))
        .json(&json!({ "age": "old" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Truncated JSON with the right content type.
    let resp = client
        .post(format!("{base}/students/10"))
        .header("content-type", "application/json")
        .body(r#"{"name":"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("decode failed"));

    // Valid JSON with no content type at all.
    let resp = client
        .post(format!("{base}/students/10"))
        .body(r#"{"name":"No Header","age":20,"email":"h@example.com"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    // Same for partial updates.
    let resp = client
        .patch(format!("{base}/students/1"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    // Nothing was written.
    let resp = client.get(format!("{base}/students/10")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}
