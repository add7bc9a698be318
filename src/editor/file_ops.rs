//! File operations: saving the buffer (with the save-as prompt when unnamed).

use super::Editor;
use crate::types::Prompt;
use std::fs;
use std::path::{Path, PathBuf};

/// Message-bar template for the save-as prompt.
pub const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";

impl Editor {
    /// Save the buffer (Ctrl+S). Prompts for a filename first if none is set.
    pub fn save(&mut self) {
        match self.file_path.clone() {
            Some(path) => self.write_to(&path),
            None => self.prompt = Some(Prompt::new(SAVE_AS_PROMPT)),
        }
    }

    /// Save the buffer to the path typed at the prompt.
    pub fn save_as(&mut self, path: PathBuf) {
        self.write_to(&path);
    }

    /// Serialize and write the buffer.
    ///
    /// A failed write is not fatal: the buffer stays dirty and the error lands in the
    /// message bar so the user can retry. Only a successful write adopts the path and
    /// resets the dirty counter.
    fn write_to(&mut self, path: &Path) {
        let content = self.buf.serialize();
        match fs::write(path, &content) {
            Ok(()) => {
                self.file_path = Some(path.to_path_buf());
                self.buf.mark_clean();
                self.set_status(format!("{} bytes written to disk", content.len()));
            }
            Err(e) => self.set_status(format!("Can't save! I/O error: {e}")),
        }
    }
}
