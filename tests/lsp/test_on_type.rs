//! Tests for list continuation through textDocument/onTypeFormatting.

use super::helpers::*;

const URI: &str = "file:///notes.txt";

/// Open `before`, let the client insert a newline at (line, character), and
/// return the text after the server's edits are applied.
async fn press_enter(before: &str, line: u32, character: u32) -> String {
    let server = TestLspServer::new();
    server.open_document(URI, before).await;
    server
        .edit_document(URI, vec![incremental_change(line, character, line, character, "\n")])
        .await;

    let text = server.get_document_content(URI).await.unwrap();
    match server.on_type(URI, line + 1, 0, "\n").await {
        Some(edits) => apply_edits(&text, &edits),
        None => text,
    }
}

#[tokio::test]
async fn test_continues_numbered_list() {
    assert_eq!(press_enter("1. one\n2. two", 1, 6).await, "1. one\n2. two\n3. ");
}

#[tokio::test]
async fn test_continues_roman_after_roman() {
    assert_eq!(press_enter("i. one\nii. two", 1, 7).await, "i. one\nii. two\niii. ");
}

#[tokio::test]
async fn test_letter_context_wins() {
    assert_eq!(press_enter("h. eight\ni. nine", 1, 7).await, "h. eight\ni. nine\nj. ");
}

#[tokio::test]
async fn test_normalizes_asterisk() {
    assert_eq!(press_enter("  * milk", 0, 8).await, "  • milk\n  • ");
}

#[tokio::test]
async fn test_empty_item_ends_list() {
    assert_eq!(press_enter("a. one\nb. ", 1, 3).await, "a. one\n\n");
}

#[tokio::test]
async fn test_plain_text_is_left_alone() {
    assert_eq!(press_enter("just text", 0, 9).await, "just text\n");
}

#[tokio::test]
async fn test_other_trigger_characters_are_ignored() {
    let server = TestLspServer::new();
    server.open_document(URI, "1. one\n").await;
    assert_eq!(server.on_type(URI, 1, 0, "}").await, None);
}

#[tokio::test]
async fn test_unknown_document() {
    let server = TestLspServer::new();
    assert_eq!(server.on_type("file:///nope.txt", 1, 0, "\n").await, None);
}
