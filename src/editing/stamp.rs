use chrono::NaiveDateTime;
use serde::Deserialize;

use super::buffer::{TextBuffer, TextEdit};
use super::handlers::EditPlan;

/// `chrono` format of the separator line; the timestamp is local time.
pub const STAMP_FORMAT: &str = "--- ✄ --------- %Y.%m.%d %H:%M -------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Insert `stamp + "\n"` at the cursor and leave the cursor after it.
    #[default]
    After,
    /// Insert `"\n" + stamp + "\n"` at the cursor and keep the cursor where it
    /// was.
    Before,
}

pub fn stamp_line(now: NaiveDateTime) -> String {
    now.format(STAMP_FORMAT).to_string()
}

/// Plan the date-stamp insertion at the buffer's cursor.
pub fn date_stamp(buffer: &impl TextBuffer, placement: Placement, now: NaiveDateTime) -> EditPlan {
    let cursor = buffer.cursor();
    let line = stamp_line(now);
    let (text, cursor_after) = match placement {
        Placement::After => {
            let text = format!("{line}\n");
            let after = cursor.after_insert(&text);
            (text, after)
        }
        Placement::Before => (format!("\n{line}\n"), cursor),
    };
    EditPlan {
        edits: vec![TextEdit::insert(cursor, text)],
        cursor: cursor_after,
    }
}
