use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tower::ServiceExt;

use rosterforge::config::{ExportConfig, ServerConfig, SubmissionConfig};
use rosterforge::router::init_router;
use rosterforge::state::AppState;
use rosterforge_core::RosterController;

static TEST_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique scratch directory per test, so parallel tests never collide.
pub fn unique_export_dir() -> PathBuf {
    let id = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("rosterforge-test-{}-{id}", std::process::id()))
}

/// Fresh state with an empty roster; no environment variables involved.
pub fn test_state() -> AppState {
    AppState {
        controller: Arc::new(RwLock::new(RosterController::new())),
        http: reqwest::Client::new(),
        server_config: ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            allowed_origins: vec![],
        },
        submission_config: SubmissionConfig {
            base_url: "http://127.0.0.1:1".to_string(),
        },
        export_config: ExportConfig {
            output_dir: unique_export_dir(),
        },
    }
}

/// Sends one request through a fresh router sharing `state`.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = init_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Like [`send`] but parses the response body as JSON (null when empty).
#[allow(dead_code)]
pub async fn send_json(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, text) = send(state, method, uri, body).await;
    let value = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap()
    };
    (status, value)
}

#[allow(dead_code)]
pub async fn create_group(
    state: &AppState,
    class_name: &str,
    label: &str,
    number: Option<u32>,
) -> (StatusCode, Value) {
    send_json(
        state,
        "POST",
        "/api/groups",
        Some(json!({
            "className": class_name,
            "label": label,
            "number": number,
        })),
    )
    .await
}

#[allow(dead_code)]
pub async fn create_student(
    state: &AppState,
    group: &str,
    full_name: &str,
    user_name: &str,
    email: &str,
    password_length: u32,
) -> (StatusCode, Value) {
    send_json(
        state,
        "POST",
        &format!("/api/groups/{group}/students"),
        Some(json!({
            "fullName": full_name,
            "userName": user_name,
            "email": email,
            "passwordLength": password_length,
        })),
    )
    .await
}
