use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::{Client, LspService, Server};

mod config;
mod conversions;
mod documents;
mod handlers;
mod helpers;
mod server;

pub use handlers::commands::{
    COMMANDS, INSERT_DATE_LINE_AFTER, INSERT_DATE_LINE_BEFORE, ON_ENTER, ON_SHIFT_TAB, ON_TAB,
};

pub struct TextworkLsp {
    client: Client,
    // Use String keys since Uri doesn't implement Send
    document_map: Arc<Mutex<HashMap<String, String>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
}

impl TextworkLsp {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_map: Arc::new(Mutex::new(HashMap::new())),
            workspace_root: Arc::new(Mutex::new(None)),
        }
    }

    /// Open documents by URI, for inspecting server state in tests.
    pub fn document_map(&self) -> Arc<Mutex<HashMap<String, String>>> {
        Arc::clone(&self.document_map)
    }
}

pub async fn run() -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(TextworkLsp::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
