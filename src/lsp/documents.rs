use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::*;

use super::conversions::apply_content_change;

/// Handle textDocument/didOpen notification
pub(crate) async fn did_open(
    client: &Client,
    document_map: Arc<Mutex<HashMap<String, String>>>,
    params: DidOpenTextDocumentParams,
) {
    let uri = params.text_document.uri.to_string();
    document_map
        .lock()
        .await
        .insert(uri.clone(), params.text_document.text);

    client
        .log_message(MessageType::INFO, format!("Opened document: {}", uri))
        .await;
}

/// Handle textDocument/didChange notification
pub(crate) async fn did_change(
    document_map: Arc<Mutex<HashMap<String, String>>>,
    params: DidChangeTextDocumentParams,
) {
    let uri = params.text_document.uri.to_string();

    // Apply incremental changes sequentially
    let mut document_map = document_map.lock().await;
    if let Some(text) = document_map.get_mut(&uri) {
        for change in params.content_changes {
            *text = apply_content_change(text, &change);
        }
    } else {
        log::debug!("Change for unknown document {}", uri);
    }
}

/// Handle textDocument/didClose notification
pub(crate) async fn did_close(
    document_map: Arc<Mutex<HashMap<String, String>>>,
    params: DidCloseTextDocumentParams,
) {
    let uri = params.text_document.uri.to_string();
    document_map.lock().await.remove(&uri);
}
