//! Parsers for the free-text responses of the generative model.
//!
//! Each parser is total: malformed input yields an empty or shortened result,
//! and the service decides whether that warrants a fallback.

use std::collections::HashSet;

use crate::fallback::clamp_description;
use crate::Category;

pub const MAX_TITLES: usize = 5;
pub const MAX_KEYWORDS: usize = 10;
pub const MAX_CATEGORIES: usize = 3;

/// One title per line, enumeration markers removed, at most five.
pub fn parse_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_enumeration)
        .map(|line| trim_quotes(line).to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_TITLES)
        .collect()
}

/// Comma separated keywords, deduplicated case-insensitively, at most ten.
pub fn parse_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    comma_items(text)
        .filter(|keyword| seen.insert(keyword.to_lowercase()))
        .map(str::to_string)
        .take(MAX_KEYWORDS)
        .collect()
}

pub fn parse_meta_description(text: &str) -> String {
    clamp_description(trim_quotes(text.trim()))
}

/// Names from `text` that match an existing category, in response order.
///
/// Matches are returned with the category's own spelling.
pub fn parse_categories(text: &str, existing: &[Category]) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();
    for item in comma_items(text) {
        let Some(category) = existing
            .iter()
            .find(|category| category.name.to_lowercase() == item.to_lowercase())
        else {
            continue;
        };
        if !picked.contains(&category.name) {
            picked.push(category.name.clone());
        }
        if picked.len() == MAX_CATEGORIES {
            break;
        }
    }
    picked
}

fn comma_items(text: &str) -> impl Iterator<Item = &str> {
    text.split(',')
        .map(|item| trim_quotes(item.trim()))
        .filter(|item| !item.is_empty())
}

// Strips "1.", "2)", "-", "*" and "•" prefixes, possibly nested ("1. - x").
fn strip_enumeration(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        let before = rest;
        if let Some(stripped) = rest.strip_prefix(['-', '*', '•']) {
            rest = stripped.trim_start();
        } else {
            let digits = rest.chars().take_while(char::is_ascii_digit).count();
            if digits > 0 {
                if let Some(stripped) = rest[digits..].strip_prefix(['.', ')']) {
                    rest = stripped.trim_start();
                }
            }
        }
        if rest == before {
            return rest.trim_end();
        }
    }
}

fn trim_quotes(text: &str) -> &str {
    text.trim_matches(|c: char| c == '"' || c == '“' || c == '”').trim()
}
