use std::collections::HashSet;

use crate::text::words;

pub const MAX_FALLBACK_KEYWORDS: usize = 8;

const TITLE_MIN_LEN: usize = 3;
const CONTENT_MIN_LEN: usize = 4;

pub const DEFAULT_KEYWORDS: [&str; 3] = ["blog", "article", "content"];

const STOP_WORDS: &[&str] = &[
    "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "my", "no", "of", "on",
    "or", "so", "to", "up", "us", "we", "the", "and", "for", "are", "but", "not", "you", "all",
    "can", "had", "her", "was", "one", "our", "out", "day", "get", "has", "him", "his", "how",
    "its", "may", "new", "now", "old", "see", "two", "who", "boy", "did", "man", "way", "she",
    "use", "oil", "sit", "set", "run", "eat", "far", "sea", "eye", "ask", "own", "say", "too",
    "any", "try", "many", "this", "that", "with", "from", "have", "will", "your", "they", "been",
    "were", "what", "when", "which", "their", "there", "about", "would", "into", "than", "then",
    "them", "these", "some", "more", "also", "just", "like", "very",
];

/// Up to eight keywords from the title and body, never empty.
pub fn fallback_keywords(title: &str, content: &str) -> Vec<String> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut seen = HashSet::new();

    let keywords: Vec<String> = words(title, TITLE_MIN_LEN)
        .into_iter()
        .chain(words(content, CONTENT_MIN_LEN))
        .filter(|word| !stop_words.contains(word.as_str()))
        .filter(|word| seen.insert(word.clone()))
        .take(MAX_FALLBACK_KEYWORDS)
        .collect();

    if keywords.is_empty() {
        return DEFAULT_KEYWORDS.iter().map(|word| word.to_string()).collect();
    }
    keywords
}
