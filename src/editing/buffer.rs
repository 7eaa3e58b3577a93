use std::io;

/// A place in a buffer. `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Where a cursor sitting at `self` ends up after `text` is inserted there.
    pub(crate) fn after_insert(self, text: &str) -> Self {
        match text.rsplit_once('\n') {
            Some((head, tail)) => Self {
                line: self.line + head.matches('\n').count() + 1,
                column: tail.chars().count(),
            },
            None => Self {
                line: self.line,
                column: self.column + text.chars().count(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn point(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// The whole of line `line`, which is `len` characters long.
    pub fn line(line: usize, len: usize) -> Self {
        Self::new(Position::new(line, 0), Position::new(line, len))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::point(at),
            new_text: text.into(),
        }
    }

    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: text.into(),
        }
    }
}

/// The document a handler reads and edits.
///
/// Edits passed to [`apply`](TextBuffer::apply) all refer to positions in the
/// buffer as it was before the call and must not overlap; a batch either
/// applies completely or not at all.
pub trait TextBuffer {
    fn line(&self, index: usize) -> Option<&str>;
    fn line_count(&self) -> usize;
    fn cursor(&self) -> Position;
    fn set_cursor(&mut self, position: Position);
    fn apply(&mut self, edits: &[TextEdit]) -> io::Result<()>;

    fn lines(&self) -> Vec<&str> {
        (0..self.line_count()).filter_map(|i| self.line(i)).collect()
    }
}

/// In-memory buffer used by the CLI and the language server.
///
/// Line endings are normalized to `\n` on the way in and restored by
/// [`to_text`](Document::to_text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    line_ending: &'static str,
    cursor: Position,
}

fn detect_line_ending(input: &str) -> &'static str {
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let line_ending = detect_line_ending(text);
        let normalized = text.replace("\r\n", "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
            line_ending,
            cursor: Position::default(),
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.join(self.line_ending)
    }

    fn byte_offset(&self, position: Position) -> io::Result<usize> {
        let Some(line) = self.lines.get(position.line) else {
            return Err(invalid(format!(
                "line {} is past the end of the document ({} lines)",
                position.line,
                self.lines.len()
            )));
        };
        let in_line = if position.column == line.chars().count() {
            line.len()
        } else {
            line.char_indices()
                .nth(position.column)
                .map(|(i, _)| i)
                .ok_or_else(|| {
                    invalid(format!(
                        "column {} is past the end of line {}",
                        position.column, position.line
                    ))
                })?
        };
        let line_start: usize = self.lines[..position.line]
            .iter()
            .map(|l| l.len() + 1)
            .sum();
        Ok(line_start + in_line)
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

impl TextBuffer for Document {
    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    fn apply(&mut self, edits: &[TextEdit]) -> io::Result<()> {
        let mut sorted: Vec<&TextEdit> = edits.iter().collect();
        sorted.sort_by_key(|edit| (edit.range.start, edit.range.end));

        for pair in sorted.windows(2) {
            if pair[0].range.end > pair[1].range.start {
                return Err(invalid(format!(
                    "overlapping edits at line {}",
                    pair[1].range.start.line
                )));
            }
        }

        let mut spans = Vec::with_capacity(sorted.len());
        for edit in &sorted {
            if edit.range.start > edit.range.end {
                return Err(invalid(format!("reversed range {:?}", edit.range)));
            }
            spans.push((
                self.byte_offset(edit.range.start)?,
                self.byte_offset(edit.range.end)?,
            ));
        }

        let mut text = self.lines.join("\n");
        for (edit, (start, end)) in sorted.iter().zip(spans).rev() {
            text.replace_range(start..end, &edit.new_text.replace("\r\n", "\n"));
        }
        self.lines = text.split('\n').map(str::to_string).collect();
        Ok(())
    }
}
