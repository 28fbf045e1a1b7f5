use std::collections::HashSet;

use crate::text::{capitalize, words};

pub const TITLE_COUNT: usize = 5;

const MIN_WORD_LEN: usize = 4;
const SEED_WORDS: usize = 3;

/// Five titles built from the first distinct longer words of `content`.
pub fn fallback_titles(content: &str) -> Vec<String> {
    let seeds = distinct_words(content);
    let seed = |index: usize| seeds.get(index).map(|word| capitalize(word));

    vec![
        seed(0)
            .map(|word| format!("{word} Guide"))
            .unwrap_or_else(|| "New Blog Post".to_string()),
        seed(1)
            .map(|word| format!("Understanding {word}"))
            .unwrap_or_else(|| "Interesting Article".to_string()),
        seed(2)
            .map(|word| format!("{word} Tips"))
            .unwrap_or_else(|| "Latest Update".to_string()),
        "Featured Content".to_string(),
        "Blog Entry".to_string(),
    ]
}

fn distinct_words(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(content, MIN_WORD_LEN)
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .take(SEED_WORDS)
        .collect()
}
