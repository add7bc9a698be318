//! The document buffer: an ordered sequence of rows plus editing operations.

use crate::row::Row;
use crate::types::Pos;

/// The document: rows of text and a dirty counter.
///
/// `dirty` counts mutations since the last save rather than being a plain flag; only
/// its zero/nonzero state is surfaced today, but every operation below increments it
/// and only a successful save resets it.
///
/// An empty document has zero rows. Out-of-range indices are clamped or ignored,
/// never allowed to corrupt row ordering or panic.
pub struct Buffer {
    rows: Vec<Row>,
    dirty: usize,
}

impl Buffer {
    /// Create an empty buffer (zero rows).
    pub fn new() -> Self {
        Self { rows: Vec::new(), dirty: 0 }
    }

    /// Build a buffer from an on-disk string.
    ///
    /// Splits on `\n`, trims a stray `\r` per line, and drops the trailing blank
    /// element a final newline produces. Loading is not an edit: `dirty` stays 0.
    pub fn from_string(s: &str) -> Self {
        let mut lines: Vec<String> = s
            .split('\n')
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            dirty: 0,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Char length of row `y`, or 0 past the end (the virtual append row).
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Row::len)
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Called after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Insert a new row at `at`, shifting later rows down. No-op if `at` is past the
    /// one-past-the-end position.
    pub fn insert_row(&mut self, at: usize, text: impl Into<String>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text));
        self.dirty += 1;
    }

    /// Remove row `at`, shifting later rows up. No-op if out of range.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Splice a character into row `p.y` at column `p.x` (clamped to the row length).
    /// No-op if the row does not exist.
    pub fn insert_char(&mut self, p: Pos, c: char) {
        let Some(row) = self.rows.get_mut(p.y) else {
            return;
        };
        row.insert_char(p.x, c);
        self.dirty += 1;
    }

    /// Remove the character at `p`. No-op if the row or column is out of range.
    pub fn delete_char(&mut self, p: Pos) {
        let Some(row) = self.rows.get_mut(p.y) else {
            return;
        };
        if row.delete_char(p.x) {
            self.dirty += 1;
        }
    }

    /// Concatenate `text` onto the end of row `y`. No-op if out of range.
    pub fn append_str(&mut self, y: usize, text: &str) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        row.append_str(text);
        self.dirty += 1;
    }

    /// Split row `p.y` at column `p.x` ("insert newline").
    ///
    /// At column 0 a fresh empty row goes in above; otherwise the content after the
    /// cursor becomes a new row below and the current row is truncated. Returns the
    /// new cursor position: column 0 of the following row.
    pub fn split_line(&mut self, p: Pos) -> Pos {
        if p.y >= self.rows.len() || p.x == 0 {
            self.insert_row(p.y.min(self.rows.len()), String::new());
        } else {
            let tail = self.rows[p.y].split_off(p.x);
            self.rows.insert(p.y + 1, Row::new(tail));
            self.dirty += 1;
        }
        Pos { y: p.y + 1, x: 0 }
    }

    /// Join row `y` onto the previous row ("delete at column 0").
    ///
    /// Returns the cursor at the join point: the previous row's original length.
    /// No-op for the first row or an out-of-range index.
    pub fn join_line(&mut self, y: usize) -> Pos {
        if y == 0 || y >= self.rows.len() {
            return Pos { y, x: 0 };
        }
        let text = self.rows[y].raw().to_string();
        let x = self.rows[y - 1].len();
        self.append_str(y - 1, &text);
        self.delete_row(y);
        Pos { y: y - 1, x }
    }

    /// The whole document as one string for saving: every row followed by `\n`.
    /// Pure projection; no side effects.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row.raw());
            out.push('\n');
        }
        out
    }
}
