use std::io;

use chrono::Local;
use textwork_lists::{Continuation, ContinueOptions, continue_item, demote_item, promote_item};

use super::buffer::{Position, Range, TextBuffer, TextEdit};
use super::native::NativeCommand;
use super::stamp::{Placement, date_stamp};
use crate::Config;

/// Edits to apply as one batch, and where the cursor goes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    pub edits: Vec<TextEdit>,
    pub cursor: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The handler took the key.
    Edit(EditPlan),
    /// The cursor line is not a list item; the host runs its own command.
    Fallback(NativeCommand),
    /// There is no line under the cursor.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Enter,
    Tab,
    ShiftTab,
    Stamp(Placement),
}

impl Command {
    /// `tab_size` is what the editor reports, if anything.
    pub fn plan(self, buffer: &impl TextBuffer, tab_size: Option<usize>, config: &Config) -> Outcome {
        match self {
            Command::Enter => enter(buffer, config.continue_options()),
            Command::Tab => tab(buffer, config.effective_tab_size(tab_size)),
            Command::ShiftTab => shift_tab(buffer, config.effective_tab_size(tab_size)),
            Command::Stamp(placement) => {
                if buffer.line(buffer.cursor().line).is_none() {
                    return Outcome::NoOp;
                }
                Outcome::Edit(date_stamp(buffer, placement, Local::now().naive_local()))
            }
        }
    }
}

/// Enter: continue the list item under the cursor, or end the list when the
/// item is empty.
pub fn enter(buffer: &impl TextBuffer, options: ContinueOptions) -> Outcome {
    let cursor = buffer.cursor();
    let lines = buffer.lines();
    let Some(line) = lines.get(cursor.line) else {
        return Outcome::NoOp;
    };
    let len = line.chars().count();

    match continue_item(&lines, cursor.line, options) {
        None => Outcome::Fallback(NativeCommand::Newline),
        Some(Continuation::Terminate) => Outcome::Edit(EditPlan {
            edits: vec![TextEdit::replace(Range::line(cursor.line, len), "\n")],
            cursor: Position::new(cursor.line + 1, 0),
        }),
        Some(Continuation::Continue { insert, glyph, .. }) => {
            let at = Position::new(cursor.line, cursor.column.min(len));
            let mut edits = Vec::with_capacity(2);
            if let Some(glyph) = glyph {
                let start = Position::new(cursor.line, glyph.column);
                let end = Position::new(cursor.line, glyph.column + 1);
                edits.push(TextEdit::replace(Range::new(start, end), glyph.text));
            }
            let cursor_after = at.after_insert(&insert);
            edits.push(TextEdit::insert(at, insert));
            Outcome::Edit(EditPlan {
                edits,
                cursor: cursor_after,
            })
        }
    }
}

/// Tab: indent the list item one level and switch it to the child kind.
pub fn tab(buffer: &impl TextBuffer, tab_size: usize) -> Outcome {
    let lines = buffer.lines();
    let line_index = buffer.cursor().line;
    if line_index >= lines.len() {
        return Outcome::NoOp;
    }
    match demote_item(&lines, line_index, tab_size) {
        Some(replacement) => replace_line(buffer, &lines, replacement),
        None => Outcome::Fallback(NativeCommand::Indent),
    }
}

/// Shift+Tab: outdent the list item one level, continuing the parent's
/// sequence when there is one.
pub fn shift_tab(buffer: &impl TextBuffer, tab_size: usize) -> Outcome {
    let lines = buffer.lines();
    let line_index = buffer.cursor().line;
    if line_index >= lines.len() {
        return Outcome::NoOp;
    }
    match promote_item(&lines, line_index, tab_size) {
        Some(replacement) => replace_line(buffer, &lines, replacement),
        None => Outcome::Fallback(NativeCommand::Outdent),
    }
}

/// Swap the cursor line for `replacement`, keeping the cursor the same
/// distance from the end of the line.
fn replace_line(buffer: &impl TextBuffer, lines: &[&str], replacement: String) -> Outcome {
    let cursor = buffer.cursor();
    let old_len = lines[cursor.line].chars().count();
    let from_end = old_len - cursor.column.min(old_len);
    let new_len = replacement.chars().count();

    Outcome::Edit(EditPlan {
        edits: vec![TextEdit::replace(
            Range::line(cursor.line, old_len),
            replacement,
        )],
        cursor: Position::new(cursor.line, new_len.saturating_sub(from_end)),
    })
}

/// Plan `command` and apply the result to `buffer`, emulating the native
/// command when the handler falls back.
pub fn execute(
    buffer: &mut impl TextBuffer,
    command: Command,
    tab_size: Option<usize>,
    config: &Config,
) -> io::Result<Outcome> {
    let outcome = command.plan(&*buffer, tab_size, config);

    let native_plan;
    let plan = match &outcome {
        Outcome::Edit(plan) => Some(plan),
        Outcome::Fallback(native) => {
            native_plan = native.plan(&*buffer, config.effective_tab_size(tab_size));
            native_plan.as_ref()
        }
        Outcome::NoOp => None,
    };

    if let Some(plan) = plan {
        buffer.apply(&plan.edits)?;
        buffer.set_cursor(plan.cursor);
    }
    Ok(outcome)
}
