pub mod metrics;
pub mod slug;

pub use metrics::{measure, reading_time, word_count, TextMetrics, WORDS_PER_MINUTE};
pub use slug::slugify;

/// Lowercased word tokens of at least `min_len` characters.
///
/// A word is a maximal run of alphanumerics or underscores; shorter runs are
/// skipped entirely rather than truncated.
pub fn words(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// First `limit` characters of `text`, respecting char boundaries.
pub fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
