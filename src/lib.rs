pub mod config;
pub mod editing;
pub mod inspect;

#[cfg(feature = "lsp")]
pub mod lsp;

pub use config::Config;
pub use config::ConfigBuilder;
pub use editing::{Command, Document, NativeCommand, Outcome, TextBuffer, execute};
pub use textwork_lists as lists;

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `command` on `input` with the cursor at `cursor` and returns the
/// resulting text, emulating native editor behavior when the command falls
/// back.
///
/// # Examples
///
/// ```rust
/// use textwork::{Command, Config, editing::Position};
///
/// let out = textwork::run_on_text("1. first", Position::new(0, 8), Command::Enter, &Config::default())
///     .unwrap();
/// assert_eq!(out, "1. first\n2. ");
/// ```
pub fn run_on_text(
    input: &str,
    cursor: editing::Position,
    command: Command,
    config: &Config,
) -> std::io::Result<String> {
    let mut doc = Document::from_text(input);
    doc.set_cursor(cursor);
    execute(&mut doc, command, None, config)?;
    Ok(doc.to_text())
}
