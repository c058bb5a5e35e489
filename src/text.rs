//! Plain-text helpers for the form logic

/// Count whitespace-delimited words: the number of maximal non-whitespace
/// runs in `text`. Empty and whitespace-only strings count as 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_chars` characters of `text`, with `...` appended when the
/// text was longer. Cuts on char boundaries, never mid-codepoint.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_words_empty_and_blank() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\t\n  \r\n"), 0);
    }

    #[test]
    fn count_words_counts_nonwhitespace_runs() {
        assert_eq!(count_words("halo"), 1);
        assert_eq!(count_words("Halo dunia ini contoh"), 4);
        assert_eq!(count_words("  spasi   ganda\tdan\nbaris  "), 4);
    }

    #[test]
    fn count_words_repeated() {
        let long = vec!["kata"; 150].join(" ");
        assert_eq!(count_words(&long), 150);
    }

    #[test]
    fn excerpt_short_text_untouched() {
        assert_eq!(excerpt("halo dunia", 150), "halo dunia");
        assert_eq!(excerpt("", 150), "");
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        let long = "a".repeat(200);
        let cut = excerpt(&long, 150);
        assert_eq!(cut.len(), 153);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn excerpt_exact_length_untouched() {
        let text = "b".repeat(150);
        assert_eq!(excerpt(&text, 150), text);
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        // multi-byte chars around the cut point must not split
        let text = "é".repeat(160);
        let cut = excerpt(&text, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
    }
}
