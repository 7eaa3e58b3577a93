//! Tests for basic document lifecycle (open, edit, close).

use super::helpers::*;

#[tokio::test]
async fn test_open_document() {
    let server = TestLspServer::new();
    server.open_document("file:///notes.txt", "1. one\n").await;

    let content = server.get_document_content("file:///notes.txt").await;
    assert_eq!(content, Some("1. one\n".to_string()));
}

#[tokio::test]
async fn test_close_document() {
    let server = TestLspServer::new();
    server.open_document("file:///notes.txt", "1. one").await;
    server.close_document("file:///notes.txt").await;

    assert_eq!(server.get_document_content("file:///notes.txt").await, None);
}

#[tokio::test]
async fn test_edit_document_full_replace() {
    let server = TestLspServer::new();
    server.open_document("file:///notes.txt", "old").await;
    server
        .edit_document("file:///notes.txt", vec![full_document_change("- new")])
        .await;

    assert_eq!(
        server.get_document_content("file:///notes.txt").await,
        Some("- new".to_string())
    );
}

#[tokio::test]
async fn test_incremental_edits_apply_in_order() {
    let server = TestLspServer::new();
    server.open_document("file:///notes.txt", "• café").await;

    // Typing after a multi-byte character, then a newline
    server
        .edit_document(
            "file:///notes.txt",
            vec![
                incremental_change(0, 6, 0, 6, " au lait"),
                incremental_change(0, 14, 0, 14, "\n"),
            ],
        )
        .await;

    assert_eq!(
        server.get_document_content("file:///notes.txt").await,
        Some("• café au lait\n".to_string())
    );
}

#[tokio::test]
async fn test_change_to_unknown_document_is_ignored() {
    let server = TestLspServer::new();
    server
        .edit_document("file:///missing.txt", vec![full_document_change("x")])
        .await;

    assert_eq!(server.get_document_content("file:///missing.txt").await, None);
}
