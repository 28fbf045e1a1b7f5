use serde::{Deserialize, Serialize};

pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub reading_time: usize,
}

pub fn measure(text: &str) -> TextMetrics {
    let word_count = word_count(text);
    TextMetrics {
        word_count,
        reading_time: minutes_for(word_count),
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up. Empty text reads in 0.
pub fn reading_time(text: &str) -> usize {
    minutes_for(word_count(text))
}

fn minutes_for(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}
