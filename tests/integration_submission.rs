mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use tokio::sync::Mutex;

use common::{create_group, create_student, send, send_json, test_state};

/// Minimal stand-in for the companion service: records the body it receives
/// and answers with a fixed status.
async fn spawn_companion(reply: StatusCode) -> (String, Arc<Mutex<Option<String>>>) {
    let received: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let captured = received.clone();

    let app = Router::new().route(
        "/data",
        post(move |body: String| {
            let captured = captured.clone();
            async move {
                *captured.lock().await = Some(body);
                reply
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

#[tokio::test]
async fn test_submission_delivers_the_json_snapshot() {
    let (base_url, received) = spawn_companion(StatusCode::OK).await;
    let mut state = test_state();
    state.submission_config.base_url = base_url;

    create_group(&state, "CS101", "lab", Some(1)).await;
    create_student(&state, "CS101-lab-1", "Ann Lee", "al", "ann@example.com", 10).await;

    let (status, body) = send_json(&state, "POST", "/api/submission", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delivered"], true);

    let (_, expected) = send(&state, "GET", "/api/exports/json", None).await;
    let payload = received.lock().await.clone().unwrap();
    assert_eq!(payload, expected);
}

#[tokio::test]
async fn test_companion_error_status_is_surfaced() {
    let (base_url, _) = spawn_companion(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut state = test_state();
    state.submission_config.base_url = base_url;

    create_group(&state, "CS101", "lab", Some(1)).await;

    let (status, body) = send_json(&state, "POST", "/api/submission", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("500"));

    // The roster is untouched by the failed delivery.
    let (_, roster) = send_json(&state, "GET", "/api/roster", None).await;
    assert_eq!(roster["className"], "CS101");
}

#[tokio::test]
async fn test_unreachable_companion_is_surfaced() {
    let state = test_state();
    // test_state points at a port nothing listens on.
    create_group(&state, "CS101", "lab", Some(1)).await;

    let (status, _) = send_json(&state, "POST", "/api/submission", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_submission_requires_a_named_roster() {
    let state = test_state();
    let (status, _) = send_json(&state, "POST", "/api/submission", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
