//! Editor: the main application state and all editing operations.

mod file_ops;
mod input;
mod movement;
mod render;

use crate::buffer::Buffer;
use crate::types::{Pos, StatusMsg};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// How many consecutive Ctrl+Q presses it takes to abandon unsaved changes.
pub const QUIT_TIMES: u32 = 3;

/// How long a status message stays visible.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// The top-level application state.
pub struct Editor {
    /// The editable document.
    pub buf: Buffer,
    /// Cursor position in the buffer.
    pub cursor: Pos,
    /// Cursor column after tab expansion; recomputed every frame.
    pub rx: usize,
    /// Viewport scroll position.
    pub row_off: usize,
    pub col_off: usize,
    /// Text area dimensions (terminal height minus the status and message bars).
    pub screen_rows: usize,
    pub screen_cols: usize,
    /// Path we'll save to.
    pub file_path: Option<PathBuf>,
    /// Optional "Save as" prompt shown in the message bar.
    pub(crate) prompt: Option<crate::types::Prompt>,
    /// Short-lived status message.
    pub(crate) status: Option<StatusMsg>,
    /// Remaining Ctrl+Q presses before a dirty buffer is abandoned.
    pub(crate) quit_times: u32,
}

impl Editor {
    /// Create a new editor for a terminal of `width` x `height` cells.
    pub fn new(path: Option<PathBuf>, width: usize, height: usize) -> Result<Self> {
        let mut ed = Self {
            buf: Buffer::new(),
            cursor: Pos { y: 0, x: 0 },
            rx: 0,
            row_off: 0,
            col_off: 0,
            screen_rows: height.saturating_sub(2),
            screen_cols: width,
            file_path: None,
            prompt: None,
            status: None,
            quit_times: QUIT_TIMES,
        };

        if let Some(p) = path {
            if p.exists() {
                let s = fs::read_to_string(&p)
                    .with_context(|| format!("Failed to read file: {}", p.display()))?;
                ed.buf = Buffer::from_string(&s);
            }
            ed.file_path = Some(p);
        }

        ed.set_status("HELP: Ctrl-S = save | Ctrl-Q = quit");
        Ok(ed)
    }

    /// Called when the terminal is resized (the main loop re-queries the size every
    /// iteration). Two rows stay reserved for the status and message bars.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.screen_cols = width;
        self.screen_rows = height.saturating_sub(2);
    }

    /// Show a message in the message bar; it expires after `MESSAGE_TIMEOUT`.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(StatusMsg::new(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ctrl, Key};

    fn editor_with(text: &str) -> Editor {
        let mut ed = Editor::new(None, 80, 24).unwrap();
        ed.buf = Buffer::from_string(text);
        ed
    }

    fn press(ed: &mut Editor, keys: &[Key]) {
        for &k in keys {
            assert!(!ed.handle_key(k).unwrap(), "unexpected quit");
        }
    }

    fn rows(ed: &Editor) -> Vec<&str> {
        (0..ed.buf.num_rows())
            .map(|y| ed.buf.row(y).unwrap().raw())
            .collect()
    }

    // ==================== end-to-end key scenarios ====================

    #[test]
    fn enter_then_delete_round_trips() {
        let mut ed = editor_with("abc\ndef");
        ed.cursor = Pos { y: 0, x: 3 };

        press(&mut ed, &[Key::Byte(b'\r')]);
        assert_eq!(rows(&ed), vec!["abc", "", "def"]);
        assert_eq!(ed.cursor, Pos { y: 1, x: 0 });

        press(&mut ed, &[Key::Delete]);
        assert_eq!(rows(&ed), vec!["abc", "def"]);
        assert_eq!(ed.cursor, Pos { y: 1, x: 0 });
    }

    #[test]
    fn typing_home_delete_on_empty_buffer() {
        let mut ed = editor_with("");
        press(
            &mut ed,
            &[
                Key::Byte(b'x'),
                Key::Byte(b'y'),
                Key::Byte(b'z'),
                Key::Home,
                Key::Delete,
            ],
        );
        assert_eq!(rows(&ed), vec!["yz"]);
        assert_eq!(ed.cursor, Pos { y: 0, x: 0 });
    }

    #[test]
    fn typing_on_virtual_append_row_creates_it() {
        let mut ed = editor_with("");
        assert_eq!(ed.buf.num_rows(), 0);
        press(&mut ed, &[Key::Byte(b'a')]);
        assert_eq!(rows(&ed), vec!["a"]);
        assert_eq!(ed.cursor, Pos { y: 0, x: 1 });
    }

    // ==================== quit confirmation ====================

    #[test]
    fn clean_buffer_quits_immediately() {
        let mut ed = editor_with("abc");
        assert!(ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
    }

    #[test]
    fn dirty_buffer_needs_three_consecutive_presses() {
        let mut ed = editor_with("");
        press(&mut ed, &[Key::Byte(b'x')]);
        assert!(ed.buf.is_dirty());

        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        assert!(ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
    }

    #[test]
    fn intervening_key_resets_quit_counter() {
        let mut ed = editor_with("");
        press(&mut ed, &[Key::Byte(b'x')]);

        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        press(&mut ed, &[Key::ArrowLeft]); // resets the countdown
        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        assert!(ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
    }

    #[test]
    fn quit_warning_reports_remaining_presses() {
        let mut ed = editor_with("");
        press(&mut ed, &[Key::Byte(b'x')]);
        assert!(!ed.handle_key(Key::Byte(ctrl(b'q'))).unwrap());
        let msg = ed.status.as_ref().unwrap().text.clone();
        assert!(msg.contains('2'), "warning should count down: {msg}");
    }

    // ==================== ignored keys ====================

    #[test]
    fn ctrl_l_and_escape_are_ignored() {
        let mut ed = editor_with("abc");
        let before = ed.cursor;
        press(&mut ed, &[Key::Byte(ctrl(b'l')), Key::Byte(0x1b)]);
        assert_eq!(ed.cursor, before);
        assert_eq!(ed.buf.dirty(), 0);
    }
}
