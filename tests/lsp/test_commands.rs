//! Tests for workspace/executeCommand and the advertised capabilities.

use serde_json::json;
use tower_lsp_server::ls_types::*;

use super::helpers::*;

const URI: &str = "file:///notes.txt";

fn args(line: u32, character: u32) -> Vec<serde_json::Value> {
    vec![json!({
        "uri": URI,
        "position": { "line": line, "character": character },
    })]
}

#[tokio::test]
async fn test_capabilities() {
    let server = TestLspServer::new();
    let caps = server.initialize().await;

    let on_type = caps.document_on_type_formatting_provider.unwrap();
    assert_eq!(on_type.first_trigger_character, "\n");

    let commands = caps.execute_command_provider.unwrap().commands;
    for name in [
        "textwork.onEnter",
        "textwork.onTab",
        "textwork.onShiftTab",
        "textwork.insertDateTimeLineAfter",
        "textwork.insertDateTimeLineBefore",
    ] {
        assert!(commands.iter().any(|c| c == name), "{name} not advertised");
    }
}

#[tokio::test]
async fn test_fallback_is_reported_for_plain_lines() {
    let server = TestLspServer::new();
    server.open_document(URI, "plain text").await;

    let result = server
        .execute("textwork.onTab", args(0, 0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result["fallback"], "indent");
    assert_eq!(result["applied"], false);
}

#[tokio::test]
async fn test_list_line_produces_edits() {
    let server = TestLspServer::new();
    server.open_document(URI, "1. one").await;

    let result = server
        .execute("textwork.onEnter", args(0, 6))
        .await
        .unwrap()
        .unwrap();
    // The edit was planned, so there is no fallback and the cursor moves to
    // the new item even though this client cannot apply it
    assert_eq!(result["fallback"], serde_json::Value::Null);
    assert_eq!(result["cursor"], json!({ "line": 1, "character": 3 }));
}

#[tokio::test]
async fn test_server_document_is_not_changed_by_commands() {
    let server = TestLspServer::new();
    server.open_document(URI, "1. one").await;
    server.execute("textwork.onTab", args(0, 6)).await.unwrap();

    // The client owns the text; the server only sees it again via didChange
    assert_eq!(
        server.get_document_content(URI).await,
        Some("1. one".to_string())
    );
}

#[tokio::test]
async fn test_unknown_command_is_invalid_params() {
    let server = TestLspServer::new();
    let err = server
        .execute("textwork.unknown", args(0, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, tower_lsp_server::jsonrpc::ErrorCode::InvalidParams);
}

#[tokio::test]
async fn test_missing_arguments_are_invalid_params() {
    let server = TestLspServer::new();
    let err = server.execute("textwork.onEnter", vec![]).await.unwrap_err();
    assert_eq!(err.code, tower_lsp_server::jsonrpc::ErrorCode::InvalidParams);
}

#[tokio::test]
async fn test_unknown_document_returns_nothing() {
    let server = TestLspServer::new();
    let result = server.execute("textwork.onEnter", args(0, 0)).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_tab_size_argument_is_accepted() {
    let server = TestLspServer::new();
    server.open_document(URI, "text").await;

    let result = server
        .execute(
            "textwork.onShiftTab",
            vec![json!({
                "uri": URI,
                "position": Position { line: 0, character: 0 },
                "tabSize": 2,
            })],
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result["fallback"], "outdent");
}
