//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::terminal;
use std::io::{self, Stdout, Write};

/// RAII guard for terminal state.
///
/// In Rust, "RAII" means you acquire a resource in `new()` and release it in `Drop`.
/// That guarantees cleanup even if the function returns early.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enable raw mode and clear the screen.
    pub fn new(stdout: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("enable_raw_mode failed")?;
        stdout.write_all(b"\x1b[2J\x1b[H")?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    /// Always restore terminal state when exiting the editor.
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x1b[2J\x1b[H");
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
