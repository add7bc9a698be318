//! Key dispatch: normal editing and the save-as prompt.

use super::{Editor, QUIT_TIMES};
use crate::keys::{ctrl, Key, ESC};
use crate::types::Pos;
use anyhow::Result;
use std::path::PathBuf;

impl Editor {
    /// Top-level key handler.
    ///
    /// Returns `Ok(true)` if the editor should quit, `Ok(false)` otherwise.
    pub fn handle_key(&mut self, key: Key) -> Result<bool> {
        // Prompt mode consumes keys first
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return Ok(false);
        }

        // Quitting requires consecutive presses: anything else restarts the countdown.
        if key != Key::Byte(ctrl(b'q')) {
            self.quit_times = QUIT_TIMES;
        }

        match key {
            Key::Byte(b) if b == ctrl(b'q') => {
                if self.buf.is_dirty() {
                    self.quit_times -= 1;
                    if self.quit_times > 0 {
                        self.set_status(format!(
                            "WARNING! File has unsaved changes. \
                             Press Ctrl-Q {} more times to quit.",
                            self.quit_times
                        ));
                        return Ok(false);
                    }
                }
                return Ok(true);
            }
            Key::Byte(b) if b == ctrl(b's') => self.save(),
            Key::Byte(b'\r') => self.insert_newline(),
            Key::Backspace => self.delete_backward(),
            Key::Byte(b) if b == ctrl(b'h') => self.delete_backward(),
            Key::Delete => {
                // Delete removes the character ahead: step over it, then delete behind.
                self.move_cursor(Key::ArrowRight);
                self.delete_backward();
            }
            Key::Home => self.cursor.x = 0,
            Key::End => self.cursor.x = self.buf.row_len(self.cursor.y),
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
                self.move_cursor(key);
            }
            Key::PageUp | Key::PageDown => self.page_move(key),
            // Ctrl-L (legacy refresh) and bare Escape are deliberate no-ops.
            Key::Byte(b) if b == ctrl(b'l') || b == ESC => {}
            Key::Byte(b) if b == b'\t' || !b.is_ascii_control() => {
                self.insert_char(b as char);
            }
            Key::Byte(_) => {}
        }

        Ok(false)
    }

    /// Insert a printable character at the cursor and advance.
    pub fn insert_char(&mut self, c: char) {
        if self.cursor.y == self.buf.num_rows() {
            self.buf.insert_row(self.cursor.y, String::new());
        }
        self.buf.insert_char(self.cursor, c);
        self.cursor.x += 1;
    }

    /// Split the current row at the cursor (Enter).
    pub fn insert_newline(&mut self) {
        self.cursor = self.buf.split_line(self.cursor);
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 of a non-first row this joins with the previous row; at the very
    /// start of the document (or on the virtual append row) it does nothing.
    pub fn delete_backward(&mut self) {
        let Pos { y, x } = self.cursor;
        if y == self.buf.num_rows() {
            return;
        }
        if x == 0 && y == 0 {
            return;
        }
        if x > 0 {
            self.buf.delete_char(Pos { y, x: x - 1 });
            self.cursor.x -= 1;
        } else {
            self.cursor = self.buf.join_line(y);
        }
    }

    /// Handle keys while the save-as prompt is active.
    fn handle_prompt_key(&mut self, key: Key) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };

        match key {
            Key::Byte(ESC) => {
                self.prompt = None;
                self.set_status("Save aborted");
            }
            Key::Byte(b'\r') => {
                if !prompt.input.is_empty() {
                    let input = std::mem::take(&mut prompt.input);
                    self.prompt = None;
                    self.save_as(PathBuf::from(input));
                }
            }
            Key::Backspace | Key::Delete => {
                prompt.input.pop();
            }
            Key::Byte(b) if b == ctrl(b'h') => {
                prompt.input.pop();
            }
            Key::Byte(b) if b < 128 && !b.is_ascii_control() => {
                prompt.input.push(b as char);
            }
            _ => {}
        }
    }
}
