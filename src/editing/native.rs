use serde::Serialize;

use super::buffer::{Position, Range, TextBuffer, TextEdit};
use super::handlers::EditPlan;

/// The editor's own behavior for a key, used when a handler declines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeCommand {
    /// Plain line break at the cursor.
    Newline,
    /// Insert `tab_size` spaces at the cursor.
    Indent,
    /// Remove up to `tab_size` leading whitespace characters from the line.
    Outdent,
}

impl NativeCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            NativeCommand::Newline => "newline",
            NativeCommand::Indent => "indent",
            NativeCommand::Outdent => "outdent",
        }
    }

    /// Emulate the command for hosts that have no editor behind them.
    /// `None` when there is nothing to do.
    pub fn plan(self, buffer: &impl TextBuffer, tab_size: usize) -> Option<EditPlan> {
        let cursor = buffer.cursor();
        let line = buffer.line(cursor.line)?;
        let len = line.chars().count();
        let at = Position::new(cursor.line, cursor.column.min(len));

        match self {
            NativeCommand::Newline => Some(EditPlan {
                edits: vec![TextEdit::insert(at, "\n")],
                cursor: at.after_insert("\n"),
            }),
            NativeCommand::Indent => {
                let spaces = " ".repeat(tab_size);
                Some(EditPlan {
                    cursor: at.after_insert(&spaces),
                    edits: vec![TextEdit::insert(at, spaces)],
                })
            }
            NativeCommand::Outdent => {
                let removable = line
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .take(tab_size)
                    .count();
                if removable == 0 {
                    return None;
                }
                Some(EditPlan {
                    edits: vec![TextEdit::replace(
                        Range::new(
                            Position::new(cursor.line, 0),
                            Position::new(cursor.line, removable),
                        ),
                        "",
                    )],
                    cursor: Position::new(cursor.line, at.column.saturating_sub(removable)),
                })
            }
        }
    }
}

impl std::fmt::Display for NativeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
