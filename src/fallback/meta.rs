use crate::text::{char_len, take_chars};

pub const META_DESCRIPTION_MAX: usize = 160;

const EXCERPT_LEN: usize = 140;
const MIN_SENTENCE_LEN: usize = 20;
const MIN_BACKTRACK: usize = 100;
const ELLIPSIS: &str = "...";

/// Description derived from the opening of `content`, at most 160 chars.
pub fn fallback_meta_description(title: &str, content: &str) -> String {
    let cleaned = strip_markdown(content);
    let cleaned = cleaned.trim();
    let first_sentence = cleaned.split('.').next().unwrap_or_default();
    let sentence_len = char_len(first_sentence);

    let mut description = if sentence_len > MIN_SENTENCE_LEN && sentence_len < EXCERPT_LEN {
        format!("{first_sentence}.")
    } else {
        take_chars(cleaned, EXCERPT_LEN).to_string()
    };

    if char_len(&description) >= EXCERPT_LEN {
        description = shorten_at_word(&description);
    }

    if description.is_empty() {
        let templated = format!(
            "Learn more about {} in this comprehensive guide.",
            title.trim().to_lowercase()
        );
        return clamp_description(&templated);
    }
    description
}

/// Hard cut to 157 chars plus an ellipsis when over the 160 char limit.
pub fn clamp_description(text: &str) -> String {
    if char_len(text) <= META_DESCRIPTION_MAX {
        return text.to_string();
    }
    let keep = META_DESCRIPTION_MAX - ELLIPSIS.len();
    format!("{}{ELLIPSIS}", take_chars(text, keep))
}

fn strip_markdown(content: &str) -> String {
    content
        .chars()
        .filter(|ch| !matches!(ch, '#' | '*' | '`'))
        .collect()
}

// Cut at the last space at or before char 140 when it keeps more than 100
// chars, otherwise at char 140.
fn shorten_at_word(text: &str) -> String {
    let window = take_chars(text, EXCERPT_LEN + 1);
    let cut = window
        .char_indices()
        .enumerate()
        .filter(|(_, (_, ch))| *ch == ' ')
        .map(|(position, (byte_idx, _))| (position, byte_idx))
        .last()
        .filter(|(position, _)| *position > MIN_BACKTRACK);

    let head = match cut {
        Some((_, byte_idx)) => &text[..byte_idx],
        None => take_chars(text, EXCERPT_LEN),
    };
    format!("{head}{ELLIPSIS}")
}
