//! Common types used throughout the editor.

use std::time::Instant;

/// A position in the document.
///
/// - `y`: row index (0-based). May legally equal the row count, meaning "past the last
///   row, about to append".
/// - `x`: **char index** within that row (0-based). May legally equal the row length,
///   meaning "at end of line". This is *not* a byte index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

/// The single-line prompt shown in the message bar (currently only "Save as").
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Display template; `{}` marks where the typed input goes.
    pub template: &'static str,
    pub input: String,
}

impl Prompt {
    pub fn new(template: &'static str) -> Self {
        Self { template, input: String::new() }
    }

    /// The full message-bar line for the current input.
    pub fn line(&self) -> String {
        self.template.replacen("{}", &self.input, 1)
    }
}

/// Short-lived status message shown in the message bar.
#[derive(Clone)]
pub struct StatusMsg {
    pub text: String,
    pub time: Instant,
}

impl StatusMsg {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), time: Instant::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_line_substitutes_input() {
        let mut p = Prompt::new("Save as: {} (ESC to cancel)");
        assert_eq!(p.line(), "Save as:  (ESC to cancel)");
        p.input.push_str("notes.txt");
        assert_eq!(p.line(), "Save as: notes.txt (ESC to cancel)");
    }
}
