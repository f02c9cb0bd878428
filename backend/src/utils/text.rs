//! Small text helpers shared by the prompt and knowledge code.

/// Keep at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters (Turkish letters,
/// emoji) are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Preview of user input for log lines.
pub fn log_preview(text: &str) -> &str {
    truncate_chars(text, 50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("merhaba", 100), "merhaba");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_chars_respects_multibyte() {
        // 'ş' and 'ı' are two bytes each
        assert_eq!(truncate_chars("danışmanlık", 5), "danış");
        assert_eq!(truncate_chars("çğıöşü", 3), "çğı");
    }

    #[test]
    fn test_log_preview_caps_at_fifty_chars() {
        let long = "a".repeat(80);
        assert_eq!(log_preview(&long).len(), 50);
    }
}
