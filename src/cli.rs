use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "textwork")]
#[command(author, version)]
#[command(about = "Outline-aware list continuation for plain-text notes")]
#[command(
    long_about = "textwork continues, indents, and outdents list items in plain-text outlines. \
    It understands bullets, decimal numbers, letters, and Roman numerals, and tells `i.` the \
    Roman numeral from `i.` the letter by looking at the item before it. Use it from the \
    command line or as a language server."
)]
#[command(after_help = "\
EXAMPLES:

    # Press Enter at the end of line 3 and print the result
    textwork enter --line 3 notes.txt

    # Indent the item on line 5 in place
    textwork tab --line 5 --write notes.txt

    # Show how each list line is recognized
    textwork inspect notes.txt

    # Start the language server
    textwork lsp

CONFIGURATION:

textwork looks for configuration files in this order:
  1. Explicit --config path
  2. textwork.toml or .textwork.toml in current/parent directories
  3. ~/.config/textwork/config.toml (XDG)
  4. Built-in defaults

Example .textwork.toml:

    tab-size = 2
    normalize-asterisk = false

    [stamp]
    placement = \"before\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, textwork will \
        search for .textwork.toml or textwork.toml in the current directory and its parents, \
        then fall back to ~/.config/textwork/config.toml."
    )]
    pub config: Option<PathBuf>,
}

/// Where to act and what to do with the result.
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Input file (stdin if not provided)
    pub file: Option<PathBuf>,

    /// 1-based line the cursor is on
    #[arg(long, short = 'l')]
    pub line: usize,

    /// 1-based character column of the cursor (end of line if omitted)
    #[arg(long, short = 'c')]
    pub column: Option<usize>,

    /// Check whether the command would change the file
    #[arg(long, conflicts_with = "write")]
    #[arg(
        long_help = "Do not print or write anything if the command leaves the input unchanged. \
        Otherwise print a diff and exit with code 1."
    )]
    pub check: bool,

    /// Write the result back to the file
    #[arg(long)]
    pub write: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Press Enter on a line
    #[command(
        long_about = "Continue the list item on the given line: insert a line break at the \
        cursor followed by the next marker. An empty item ends the list instead. Lines that are \
        not list items get a plain line break."
    )]
    Enter {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Press Tab on a line
    #[command(
        long_about = "Indent the list item on the given line one level and switch its marker \
        to the child kind: numbers become letters, letters become Roman numerals, and Roman \
        numerals become numbers. Other lines get spaces inserted at the cursor."
    )]
    Tab {
        #[command(flatten)]
        edit: EditArgs,

        /// Columns per indent level (overrides the config)
        #[arg(long)]
        tab_size: Option<usize>,
    },

    /// Press Shift+Tab on a line
    #[command(
        long_about = "Outdent the list item on the given line one level. If an item already \
        exists at the shallower depth, the outdented item continues its sequence. Other lines \
        lose up to one indent level of leading whitespace."
    )]
    ShiftTab {
        #[command(flatten)]
        edit: EditArgs,

        /// Columns per indent level (overrides the config)
        #[arg(long)]
        tab_size: Option<usize>,
    },

    /// Insert a date-stamped separator line
    Stamp {
        #[command(flatten)]
        edit: EditArgs,

        /// Put the stamp on a new line after the cursor, keeping the cursor in place
        #[arg(long)]
        before: bool,
    },

    /// Show how each list line is recognized
    #[command(after_help = "\
EXAMPLES:

    # Table of list items
    textwork inspect notes.txt

    # Machine-readable output
    textwork inspect --json notes.txt
")]
    Inspect {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Start the language server
    #[command(
        long_about = "Start the language server over stdin/stdout. It continues lists on type \
        formatting for newlines and exposes the textwork.onEnter, textwork.onTab, \
        textwork.onShiftTab, textwork.insertDateTimeLineAfter, and \
        textwork.insertDateTimeLineBefore commands."
    )]
    Lsp,
}
