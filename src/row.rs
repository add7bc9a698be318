//! A single row of text and its tab-expanded render projection.

use crate::utils::char_to_byte_index;
use std::cmp::min;

/// Tab stops sit at every multiple of this render column.
pub const TAB_STOP: usize = 8;

/// One logical line of the document.
///
/// `raw` is the stored content (no trailing newline). `render` is what the screen
/// shows: identical except that every tab is expanded to spaces. The render form is
/// cached and recomputed on every mutation, never derived lazily, so the two can
/// never drift apart.
pub struct Row {
    raw: String,
    render: String,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        let mut row = Self { raw: text.into(), render: String::new() };
        row.update_render();
        row
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn render(&self) -> &str {
        &self.render
    }

    /// Length in characters (not bytes).
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Insert `c` at char index `at`, clamped to `[0, len]`.
    pub fn insert_char(&mut self, at: usize, c: char) {
        let at = min(at, self.len());
        let bi = char_to_byte_index(&self.raw, at);
        self.raw.insert(bi, c);
        self.update_render();
    }

    /// Remove the char at index `at`. Returns false (and leaves the row untouched)
    /// when `at` is out of range.
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.len() {
            return false;
        }
        let bi = char_to_byte_index(&self.raw, at);
        self.raw.remove(bi);
        self.update_render();
        true
    }

    pub fn append_str(&mut self, s: &str) {
        self.raw.push_str(s);
        self.update_render();
    }

    /// Truncate the row at char index `at` and return the tail.
    pub fn split_off(&mut self, at: usize) -> String {
        let bi = char_to_byte_index(&self.raw, at);
        let tail = self.raw.split_off(bi);
        self.update_render();
        tail
    }

    /// Map a cursor char index into its on-screen render column.
    ///
    /// This must walk the row char by char because every tab before the cursor
    /// shifts everything behind it.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for c in self.raw.chars().take(cx) {
            if c == '\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Recompute the render projection. Tabs are expanded per character: each one
    /// pushes spaces up to the next `TAB_STOP` boundary.
    fn update_render(&mut self) {
        self.render.clear();
        let mut col = 0;
        for c in self.raw.chars() {
            if c == '\t' {
                self.render.push(' ');
                col += 1;
                while col % TAB_STOP != 0 {
                    self.render.push(' ');
                    col += 1;
                }
            } else {
                self.render.push(c);
                col += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_raw_without_tabs() {
        let row = Row::new("hello world");
        assert_eq!(row.render(), "hello world");
    }

    #[test]
    fn lone_tab_renders_to_eight_spaces() {
        let row = Row::new("\t");
        assert_eq!(row.render(), "        ");
    }

    #[test]
    fn tab_at_column_three_pads_to_eight() {
        // "abc" ends at render column 3, so the tab adds 5 spaces.
        let row = Row::new("abc\tx");
        assert_eq!(row.render(), "abc     x");
    }

    #[test]
    fn every_tab_expands_not_just_whole_row() {
        // Regression guard: mid-line tabs must expand individually.
        let row = Row::new("a\tb\tc");
        assert_eq!(row.render(), "a       b       c");
    }

    #[test]
    fn tab_at_boundary_advances_a_full_stop() {
        let row = Row::new("12345678\tx");
        assert_eq!(row.render(), "12345678        x");
    }

    #[test]
    fn cx_to_rx_maps_through_tabs() {
        let row = Row::new("ab\tcd");
        assert_eq!(row.cx_to_rx(0), 0);
        assert_eq!(row.cx_to_rx(1), 1);
        assert_eq!(row.cx_to_rx(2), 2); // on the tab
        assert_eq!(row.cx_to_rx(3), 8); // just past the tab
        assert_eq!(row.cx_to_rx(4), 9);
    }

    #[test]
    fn cx_to_rx_is_identity_without_tabs() {
        let row = Row::new("plain");
        for i in 0..=5 {
            assert_eq!(row.cx_to_rx(i), i);
        }
    }

    #[test]
    fn insert_clamps_out_of_range_column() {
        let mut row = Row::new("ab");
        row.insert_char(99, 'c');
        assert_eq!(row.raw(), "abc");
    }

    #[test]
    fn insert_recomputes_render() {
        let mut row = Row::new("ab");
        row.insert_char(1, '\t');
        assert_eq!(row.raw(), "a\tb");
        assert_eq!(row.render(), "a       b");
    }

    #[test]
    fn delete_out_of_range_is_noop() {
        let mut row = Row::new("ab");
        assert!(!row.delete_char(2));
        assert_eq!(row.raw(), "ab");
    }

    #[test]
    fn insert_then_delete_round_trips() {
        let mut row = Row::new("hello");
        for at in 0..=row.len() {
            row.insert_char(at, 'X');
            assert!(row.delete_char(at));
            assert_eq!(row.raw(), "hello");
        }
    }

    #[test]
    fn split_off_leaves_head_and_returns_tail() {
        let mut row = Row::new("hello world");
        let tail = row.split_off(5);
        assert_eq!(row.raw(), "hello");
        assert_eq!(tail, " world");
    }
}
