//! `tilde` — a minimal full-screen terminal text editor.
//!
//! ## Reading guide (high level architecture)
//! - **`main()` / `run()`**: sets up the terminal and runs the main render/read/handle loop.
//! - **`terminal::TerminalGuard`**: switches the terminal into raw mode and reliably restores
//!   it on exit (even on panic unwind).
//! - **`keys`**: reads raw bytes from stdin and decodes terminal escape sequences into
//!   logical `Key` values.
//! - **`buffer::Buffer` / `row::Row`**: the document model (rows of text plus their
//!   tab-expanded render projection) and the low-level editing operations.
//! - **`editor::Editor`**: application state + key handling + rendering + the save-as prompt.

mod buffer;
mod editor;
mod keys;
mod row;
mod terminal;
mod types;
mod utils;

use anyhow::Result;
use crossterm::tty::IsTty;
use editor::Editor;
use keys::{read_key, StdinInput};
use std::io;
use terminal::TerminalGuard;

/// Program entry point.
///
/// We return `anyhow::Result` so we can use `?` with rich error context throughout the code.
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Runs the editor:
/// - parses command line arguments
/// - sets up the terminal (raw mode)
/// - initializes `Editor` state
/// - loops: render → read one key → update state
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Simple argument parsing
    let mut file_to_open = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "-h" | "--help" => {
                println!("tilde — a minimal TUI text editor");
                println!();
                println!("USAGE:");
                println!("    tilde [FILE]          Open a file (creates if doesn't exist)");
                println!("    tilde -h, --help      Show this help message");
                println!("    tilde -v, --version   Show version information");
                println!();
                println!("KEYBINDINGS:");
                println!("    Ctrl+S                 Save");
                println!("    Ctrl+Q                 Quit (press 3 times to discard changes)");
                println!("    Arrows / PgUp / PgDn   Move the cursor");
                println!("    Home / End             Start / end of line");
                return Ok(());
            }
            "-v" | "--version" => {
                println!("tilde v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            path if path.starts_with('-') => {
                eprintln!("Error: Unknown flag '{}'", path);
                eprintln!("Try 'tilde --help' for more information.");
                std::process::exit(1);
            }
            path => {
                file_to_open = Some(std::path::PathBuf::from(path));
            }
        }
    }

    // Refuse to start without an interactive terminal, before touching raw mode.
    if !io::stdin().is_tty() {
        anyhow::bail!("tilde requires an interactive terminal");
    }

    let mut stdout = io::stdout();
    let _term = TerminalGuard::new(&mut stdout)?;

    let (w, h) = crossterm::terminal::size()?;
    let mut editor = Editor::new(file_to_open, w as usize, h as usize)?;
    let mut input = StdinInput::new();

    // Main loop: exactly one frame per processed key, in strict alternation.
    loop {
        let (w, h) = crossterm::terminal::size()?;
        editor.resize(w as usize, h as usize);
        editor.render(&mut stdout)?;

        let key = read_key(&mut input)?;
        let should_quit = editor.handle_key(key)?;
        if should_quit {
            break;
        }
    }

    Ok(())
}
