use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::ls_types::Uri;

use crate::Config;

use super::config::load_config;

/// Helper to get document content from the document map
pub(crate) async fn get_document_content(
    document_map: &Arc<Mutex<HashMap<String, String>>>,
    uri: &Uri,
) -> Option<String> {
    let doc_map = document_map.lock().await;
    doc_map.get(&uri.to_string()).cloned()
}

/// Combined helper: get document and config in one call
pub(crate) async fn get_document_and_config(
    client: &tower_lsp_server::Client,
    document_map: &Arc<Mutex<HashMap<String, String>>>,
    workspace_root: &Arc<Mutex<Option<PathBuf>>>,
    uri: &Uri,
) -> Option<(String, Config)> {
    let content = get_document_content(document_map, uri).await?;
    let workspace_root = workspace_root.lock().await.clone();
    let config = load_config(client, &workspace_root, Some(uri)).await;
    Some((content, config))
}
