//! Utility functions.

/// Convert a "character index" to a "byte index" in a UTF‑8 string.
///
/// Why this exists: Rust strings are UTF‑8, so you cannot safely slice with `s[a..b]` unless
/// `a` and `b` are **byte offsets** that lie on UTF‑8 character boundaries.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    let mut ci = 0usize;
    for (bi, _) in s.char_indices() {
        if ci == char_idx {
            return bi;
        }
        ci += 1;
    }
    s.len()
}
