use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;

use textwork_lists::{Continuation, continue_item};

use super::super::conversions::to_lsp_edit;
use super::super::helpers::get_document_and_config;
use crate::Config;
use crate::editing::{self, Document, TextBuffer};

/// Handle textDocument/onTypeFormatting request
///
/// Only newlines are handled. By the time the request arrives the editor has
/// already split the line, so the list item is the line above the cursor.
pub(crate) async fn on_type_formatting(
    client: &Client,
    document_map: Arc<Mutex<HashMap<String, String>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
    params: DocumentOnTypeFormattingParams,
) -> Result<Option<Vec<TextEdit>>> {
    if params.ch != "\n" {
        return Ok(None);
    }

    let uri = params.text_document_position.text_document.uri;
    let position = params.text_document_position.position;

    let Some((text, config)) =
        get_document_and_config(client, &document_map, &workspace_root, &uri).await
    else {
        return Ok(None);
    };

    Ok(newline_edits(&text, position.line as usize, &config))
}

/// Edits that turn the freshly opened line `line` into the next list item.
pub(crate) fn newline_edits(text: &str, line: usize, config: &Config) -> Option<Vec<TextEdit>> {
    let previous = line.checked_sub(1)?;
    let doc = Document::from_text(text);
    let lines = doc.lines();
    let new_line = lines.get(line)?;

    let continuation = continue_item(&lines, previous, config.continue_options())?;

    let leading = new_line.chars().take_while(|c| c.is_whitespace()).count();
    let whitespace = editing::Range::new(
        editing::Position::new(line, 0),
        editing::Position::new(line, leading),
    );

    let edits = match continuation {
        Continuation::Terminate => {
            let previous_len = lines[previous].chars().count();
            vec![
                editing::TextEdit::replace(editing::Range::line(previous, previous_len), ""),
                editing::TextEdit::replace(whitespace, ""),
            ]
        }
        Continuation::Continue { insert, glyph, .. } => {
            let mut edits = Vec::with_capacity(2);
            if let Some(glyph) = glyph {
                edits.push(editing::TextEdit::replace(
                    editing::Range::new(
                        editing::Position::new(previous, glyph.column),
                        editing::Position::new(previous, glyph.column + 1),
                    ),
                    glyph.text,
                ));
            }
            edits.push(editing::TextEdit::replace(
                whitespace,
                insert.trim_start_matches('\n'),
            ));
            edits
        }
    };

    log::debug!("on-type newline at line {}: {} edit(s)", line, edits.len());
    Some(edits.iter().map(|edit| to_lsp_edit(&lines, edit)).collect())
}
