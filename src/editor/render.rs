//! Rendering: building one escape-coded frame per refresh.

use super::{Editor, MESSAGE_TIMEOUT};
use anyhow::Result;
use std::io::Write;

/// Text shown centered on an empty buffer.
const WELCOME: &str = concat!("tilde editor -- version ", env!("CARGO_PKG_VERSION"));

impl Editor {
    /// Render the whole UI: assemble a frame and flush it in a single write, so a
    /// partially drawn screen is never visible.
    pub fn render(&mut self, out: &mut impl Write) -> Result<()> {
        let frame = self.render_frame();
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Assemble one complete frame.
    ///
    /// Order matters: scroll recompute, hide cursor, home, text rows, status bar,
    /// message bar, cursor placement, show cursor.
    pub fn render_frame(&mut self) -> String {
        self.scroll();

        let mut frame = String::new();
        frame.push_str("\x1b[?25l");
        frame.push_str("\x1b[H");

        self.draw_rows(&mut frame);
        self.draw_status_bar(&mut frame);
        self.draw_message_bar(&mut frame);

        frame.push_str(&format!(
            "\x1b[{};{}H",
            self.cursor.y - self.row_off + 1,
            self.rx - self.col_off + 1
        ));
        frame.push_str("\x1b[?25h");
        frame
    }

    /// The text area: visible buffer rows, the welcome banner, or `~` fillers.
    fn draw_rows(&self, frame: &mut String) {
        for i in 0..self.screen_rows {
            let file_row = i + self.row_off;
            frame.push_str("\x1b[K");

            if file_row >= self.buf.num_rows() {
                if self.buf.num_rows() == 0 && i == self.screen_rows / 2 {
                    self.draw_welcome(frame);
                } else {
                    frame.push('~');
                }
            } else if let Some(row) = self.buf.row(file_row) {
                let visible: String = row
                    .render()
                    .chars()
                    .skip(self.col_off)
                    .take(self.screen_cols)
                    .collect();
                frame.push_str(&visible);
            }

            frame.push_str("\r\n");
        }
    }

    /// Center the welcome banner; the first padding column keeps the `~` gutter.
    fn draw_welcome(&self, frame: &mut String) {
        let msg: String = WELCOME.chars().take(self.screen_cols).collect();
        let mut padding = (self.screen_cols.saturating_sub(msg.chars().count())) / 2;
        if padding > 0 {
            frame.push('~');
            padding -= 1;
        }
        for _ in 0..padding {
            frame.push(' ');
        }
        frame.push_str(&msg);
    }

    /// Reverse-video status bar, padded/truncated to exactly the terminal width:
    /// filename, line count, modified marker, and a right-aligned row indicator.
    fn draw_status_bar(&self, frame: &mut String) {
        let name = self
            .file_path
            .as_ref()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
        let modified = if self.buf.is_dirty() { " (modified)" } else { "" };

        let left = format!("{:.20} - {} lines{}", name, self.buf.num_rows(), modified);
        let right = format!("{}/{}", self.cursor.y + 1, self.buf.num_rows());

        let mut bar: String = left.chars().take(self.screen_cols).collect();
        let rlen = right.chars().count();
        while bar.chars().count() < self.screen_cols {
            if self.screen_cols - bar.chars().count() == rlen {
                bar.push_str(&right);
                break;
            }
            bar.push(' ');
        }

        frame.push_str("\x1b[7m");
        frame.push_str(&bar);
        frame.push_str("\x1b[m\r\n");
    }

    /// Message bar: the active prompt line, or a status message younger than
    /// `MESSAGE_TIMEOUT`, or nothing.
    fn draw_message_bar(&self, frame: &mut String) {
        frame.push_str("\x1b[K");
        let line = if let Some(p) = &self.prompt {
            Some(p.line())
        } else {
            self.status
                .as_ref()
                .filter(|s| s.time.elapsed() < MESSAGE_TIMEOUT)
                .map(|s| s.text.clone())
        };
        if let Some(line) = line {
            let visible: String = line.chars().take(self.screen_cols).collect();
            frame.push_str(&visible);
        }
    }
}
