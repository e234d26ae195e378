mod common;

use axum::http::StatusCode;

use common::{create_group, create_student, send, send_json, test_state};

async fn seeded_state() -> rosterforge::state::AppState {
    let state = test_state();
    create_group(&state, "CS101", "lab", Some(1)).await;
    create_group(&state, "CS101", "lab", Some(2)).await;
    create_student(&state, "CS101-lab-1", "Ann Lee", "al", "ann@example.com", 10).await;
    state
}

#[tokio::test]
async fn test_json_export_round_trips() {
    let state = seeded_state().await;

    let (status, content) = send(&state, "GET", "/api/exports/json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content.starts_with("{\n  \"className\": \"CS101\","));
    assert!(content.contains("\"password\""));

    let (_, roster) = send_json(&state, "GET", "/api/roster", None).await;
    let decoded: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(decoded, roster);
}

#[tokio::test]
async fn test_config_exports_disagree_on_passwords() {
    let state = seeded_state().await;

    let (_, toml) = send(&state, "GET", "/api/exports/toml", None).await;
    let (_, yaml) = send(&state, "GET", "/api/exports/yaml", None).await;
    assert!(toml.contains("password = "));
    assert!(!yaml.contains("password"));
    assert!(toml.starts_with("[CS101]\n"));
    assert!(yaml.starts_with("CS101:\n  groups:\n"));
}

#[tokio::test]
async fn test_markdown_export_has_tables_and_placeholder() {
    let state = seeded_state().await;

    let (status, markdown) = send(&state, "GET", "/api/exports/markdown", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(markdown.starts_with("# CS101\n"));
    assert!(markdown.contains("| Full Name | Username | Email |"));
    assert!(markdown.contains("| Ann Lee | al | ann@example.com |"));
    assert!(markdown.contains("No students in this group."));
    assert!(!markdown.contains("password"));
}

#[tokio::test]
async fn test_html_export_is_printable_and_password_free() {
    let state = seeded_state().await;

    let (status, html) = send(&state, "GET", "/api/exports/html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<th>Full Name</th><th>Username</th><th>Email</th>"));
    assert!(!html.contains("password"));
}

#[tokio::test]
async fn test_unknown_format_is_rejected() {
    let state = seeded_state().await;
    let (status, _) = send(&state, "GET", "/api/exports/xml", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_export_writes_class_named_file() {
    let state = seeded_state().await;

    let (status, saved) = send_json(&state, "POST", "/api/exports/markdown", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["fileName"], "CS101.md");

    let written = std::fs::read_to_string(saved["path"].as_str().unwrap()).unwrap();
    let (_, preview) = send(&state, "GET", "/api/exports/markdown", None).await;
    assert_eq!(written, preview);

    std::fs::remove_dir_all(&state.export_config.output_dir).ok();
}

#[tokio::test]
async fn test_save_export_requires_a_named_roster() {
    let state = test_state();
    let (status, _) = send_json(&state, "POST", "/api/exports/json", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
