//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - String helpers for log output

mod selector;

pub use selector::parse_selector_with_fallback;

/// Truncates `text` to at most `max_chars` characters for log previews.
///
/// Cuts on a character boundary and appends `...` when anything was dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 4), "héll...");
        assert_eq!(preview("", 3), "");
    }
}
