//! CLI integration tests for textwork.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Keypress subcommands (enter, tab, shift-tab, stamp)
//! - Stdin/stdout handling and --write/--check
//! - Exit codes
//! - Error handling

mod common;
mod edit;
mod inspect;

#[cfg(feature = "lsp")]
mod lsp;
