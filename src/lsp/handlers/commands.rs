use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::jsonrpc::{Error, Result};
use tower_lsp_server::ls_types::*;

use serde::Deserialize;
use serde_json::json;

use super::super::conversions::{from_lsp_position, to_lsp_edit, to_lsp_position};
use super::super::helpers::get_document_and_config;
use crate::Config;
use crate::editing::{Command, Document, NativeCommand, Outcome, Placement, TextBuffer};

pub const ON_ENTER: &str = "textwork.onEnter";
pub const ON_TAB: &str = "textwork.onTab";
pub const ON_SHIFT_TAB: &str = "textwork.onShiftTab";
pub const INSERT_DATE_LINE_AFTER: &str = "textwork.insertDateTimeLineAfter";
pub const INSERT_DATE_LINE_BEFORE: &str = "textwork.insertDateTimeLineBefore";

/// Every command advertised in `executeCommandProvider`.
pub const COMMANDS: [&str; 5] = [
    ON_ENTER,
    ON_TAB,
    ON_SHIFT_TAB,
    INSERT_DATE_LINE_AFTER,
    INSERT_DATE_LINE_BEFORE,
];

pub(crate) fn command_for(name: &str) -> Option<Command> {
    match name {
        ON_ENTER => Some(Command::Enter),
        ON_TAB => Some(Command::Tab),
        ON_SHIFT_TAB => Some(Command::ShiftTab),
        INSERT_DATE_LINE_AFTER => Some(Command::Stamp(Placement::After)),
        INSERT_DATE_LINE_BEFORE => Some(Command::Stamp(Placement::Before)),
        _ => None,
    }
}

/// The single argument every command takes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandArgs {
    pub uri: Uri,
    pub position: Position,
    #[serde(default)]
    pub tab_size: Option<usize>,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct CommandPlan {
    pub edits: Vec<TextEdit>,
    /// Where the cursor belongs once `edits` are applied.
    pub cursor: Option<Position>,
    pub fallback: Option<NativeCommand>,
}

/// Plan `command` at `position` in `text`, in LSP coordinates.
pub(crate) fn plan_command(
    text: &str,
    command: Command,
    position: Position,
    tab_size: Option<usize>,
    config: &Config,
) -> CommandPlan {
    let mut doc = Document::from_text(text);
    let cursor = from_lsp_position(&doc.lines(), position);
    doc.set_cursor(cursor);

    match command.plan(&doc, tab_size, config) {
        Outcome::Edit(plan) => {
            let edits = {
                let lines = doc.lines();
                plan.edits.iter().map(|e| to_lsp_edit(&lines, e)).collect()
            };
            // Cursor positions refer to the edited text
            let cursor = match doc.apply(&plan.edits) {
                Ok(()) => Some(to_lsp_position(&doc.lines(), plan.cursor)),
                Err(e) => {
                    log::warn!("Planned edits do not apply: {}", e);
                    None
                }
            };
            CommandPlan {
                edits,
                cursor,
                fallback: None,
            }
        }
        Outcome::Fallback(native) => CommandPlan {
            fallback: Some(native),
            ..Default::default()
        },
        Outcome::NoOp => CommandPlan::default(),
    }
}

/// Handle workspace/executeCommand request
///
/// Edits go to the client through workspace/applyEdit. The response reports
/// whether they were applied and which native command the client should run
/// instead when the cursor line is not a list item.
pub(crate) async fn execute_command(
    client: &Client,
    document_map: Arc<Mutex<HashMap<String, String>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
    params: ExecuteCommandParams,
) -> Result<Option<LSPAny>> {
    let Some(command) = command_for(&params.command) else {
        return Err(Error::invalid_params(format!(
            "Unknown command: {}",
            params.command
        )));
    };

    let args: CommandArgs = params
        .arguments
        .into_iter()
        .next()
        .and_then(|value| serde_json::from_value(value).ok())
        .ok_or_else(|| Error::invalid_params("Expected a {uri, position} argument"))?;

    let Some((text, config)) =
        get_document_and_config(client, &document_map, &workspace_root, &args.uri).await
    else {
        client
            .log_message(
                MessageType::ERROR,
                format!("Document not found: {}", args.uri.as_str()),
            )
            .await;
        return Ok(None);
    };

    let plan = plan_command(&text, command, args.position, args.tab_size, &config);

    let applied = if plan.edits.is_empty() {
        false
    } else {
        let edit = WorkspaceEdit {
            changes: Some(HashMap::from([(args.uri.clone(), plan.edits)])),
            ..Default::default()
        };
        match client.apply_edit(edit).await {
            Ok(response) => response.applied,
            Err(e) => {
                client
                    .log_message(
                        MessageType::WARNING,
                        format!("workspace/applyEdit failed: {}", e),
                    )
                    .await;
                false
            }
        }
    };

    Ok(Some(json!({
        "applied": applied,
        "cursor": plan.cursor,
        "fallback": plan.fallback,
    })))
}
