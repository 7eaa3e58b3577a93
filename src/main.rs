use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use textwork::editing::{Placement, Position};
use textwork::{Command, Config, Document, TextBuffer, execute};

mod cli;
use cli::{Cli, Commands, EditArgs};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = textwork::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

/// Turn 1-based `--line`/`--column` into a cursor inside `doc`.
fn cursor_from_args(doc: &Document, line: usize, column: Option<usize>) -> Result<Position, String> {
    if line == 0 || line > doc.line_count() {
        return Err(format!(
            "Line {} is out of range (document has {} lines)",
            line,
            doc.line_count()
        ));
    }
    let index = line - 1;
    let len = doc.line(index).map_or(0, |l| l.chars().count());

    let column = match column {
        None => len,
        Some(0) => return Err("Columns are 1-indexed (start from 1)".to_string()),
        Some(c) if c > len + 1 => {
            return Err(format!(
                "Column {} is past the end of line {} ({} characters)",
                c, line, len
            ));
        }
        Some(c) => c - 1,
    };
    Ok(Position::new(index, column))
}

fn print_diff(file_path: &str, original: &str, edited: &str) {
    let diff = TextDiff::from_lines(original, edited);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),   // normal
                };

                print!("{}{}{}", style, sign, change.value());
                if change.missing_newline() {
                    println!();
                }

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

fn run_edit(
    config_path: Option<&Path>,
    args: EditArgs,
    command: Command,
    tab_size: Option<usize>,
) -> io::Result<()> {
    if args.write && args.file.is_none() {
        eprintln!("Error: --write needs a file argument");
        std::process::exit(1);
    }

    let cfg = load_config(config_path, &args.file)?;
    let input = read_all(args.file.as_ref())?;
    let mut doc = Document::from_text(&input);

    match cursor_from_args(&doc, args.line, args.column) {
        Ok(cursor) => doc.set_cursor(cursor),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let outcome = execute(&mut doc, command, tab_size, &cfg)?;
    log::debug!("{:?} -> {:?}", command, outcome);
    let output = doc.to_text();

    if args.check {
        if input != output {
            let file_name = args
                .file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("<stdin>");
            print_diff(file_name, &input, &output);
            std::process::exit(1);
        }
    } else if args.write {
        if let Some(file_path) = &args.file {
            fs::write(file_path, &output)?;
            println!("Updated {}", file_path.display());
        }
    } else {
        print!("{output}");
    }

    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Enter { edit } => run_edit(config_path, edit, Command::Enter, None),
        Commands::Tab { edit, tab_size } => run_edit(config_path, edit, Command::Tab, tab_size),
        Commands::ShiftTab { edit, tab_size } => {
            run_edit(config_path, edit, Command::ShiftTab, tab_size)
        }
        Commands::Stamp { edit, before } => {
            let placement = if before {
                Placement::Before
            } else {
                load_config(config_path, &edit.file)?.stamp.placement
            };
            run_edit(config_path, edit, Command::Stamp(placement), None)
        }
        Commands::Inspect { file, json } => {
            let input = read_all(file.as_ref())?;
            let doc = Document::from_text(&input);
            let lines = doc.lines();
            let reports = textwork::inspect::inspect(&lines);

            if json {
                let out = serde_json::to_string_pretty(&reports).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                print!("{}", textwork::inspect::render(&reports));
            }
            Ok(())
        }
        #[cfg(feature = "lsp")]
        Commands::Lsp => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async { textwork::lsp::run().await })?;
            Ok(())
        }
        #[cfg(not(feature = "lsp"))]
        Commands::Lsp => {
            eprintln!("Error: textwork was built without the lsp feature");
            std::process::exit(1);
        }
    }
}
