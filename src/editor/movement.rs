//! Cursor movement and viewport scrolling.

use super::Editor;
use crate::keys::Key;
use crate::types::Pos;
use std::cmp::min;

impl Editor {
    /// Move the cursor one cell in response to an arrow key.
    ///
    /// Left at column 0 wraps to the end of the previous row; right at end of row
    /// wraps to column 0 of the next. Vertical moves may land on the virtual row one
    /// past the end. After any move the column snaps to the new row's length.
    pub fn move_cursor(&mut self, key: Key) {
        let Pos { mut y, mut x } = self.cursor;

        match key {
            Key::ArrowLeft => {
                if x > 0 {
                    x -= 1;
                } else if y > 0 {
                    y -= 1;
                    x = self.buf.row_len(y);
                }
            }
            Key::ArrowRight => {
                if y < self.buf.num_rows() {
                    if x < self.buf.row_len(y) {
                        x += 1;
                    } else {
                        y += 1;
                        x = 0;
                    }
                }
            }
            Key::ArrowUp => {
                y = y.saturating_sub(1);
            }
            Key::ArrowDown => {
                if y < self.buf.num_rows() {
                    y += 1;
                }
            }
            _ => {}
        }

        x = min(x, self.buf.row_len(y));
        self.cursor = Pos { y, x };
    }

    /// PageUp/PageDown: jump the cursor to the top/bottom of the viewport, then move
    /// a full screen of rows in that direction.
    pub fn page_move(&mut self, key: Key) {
        let dir = match key {
            Key::PageUp => {
                self.cursor.y = self.row_off;
                Key::ArrowUp
            }
            Key::PageDown => {
                self.cursor.y = min(
                    self.row_off + self.screen_rows.saturating_sub(1),
                    self.buf.num_rows(),
                );
                Key::ArrowDown
            }
            _ => return,
        };
        for _ in 0..self.screen_rows {
            self.move_cursor(dir);
        }
    }

    /// Recompute `rx` and slide the viewport just enough to keep the cursor visible.
    ///
    /// Pure cursor/offset math; never recenters. Runs at the start of every refresh.
    pub fn scroll(&mut self) {
        self.rx = self
            .buf
            .row(self.cursor.y)
            .map_or(0, |row| row.cx_to_rx(self.cursor.x));

        if self.cursor.y < self.row_off {
            self.row_off = self.cursor.y;
        }
        if self.cursor.y >= self.row_off + self.screen_rows {
            self.row_off = self.cursor.y + 1 - self.screen_rows;
        }
        if self.rx < self.col_off {
            self.col_off = self.rx;
        }
        if self.rx >= self.col_off + self.screen_cols {
            self.col_off = self.rx + 1 - self.screen_cols;
        }
    }
}
