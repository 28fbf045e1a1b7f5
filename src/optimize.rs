//! Content optimization report and the parser for its labelled response.
//!
//! The model is asked for three sections:
//!
//! ```text
//! SUGGESTIONS:
//! - ...
//! IMPROVEMENTS:
//! - ...
//! SCORE: 8
//! ```
//!
//! Parsing is line oriented and tolerant: a missing section yields an empty
//! list and a missing or out-of-range score yields the default.

use serde::{Deserialize, Serialize};

pub const DEFAULT_READABILITY_SCORE: u8 = 7;
pub const MAX_SUGGESTIONS: usize = 3;
pub const MAX_IMPROVEMENTS: usize = 2;

const SUGGESTIONS_HEADER: &str = "SUGGESTIONS:";
const IMPROVEMENTS_HEADER: &str = "IMPROVEMENTS:";
const SCORE_HEADER: &str = "SCORE:";
const HEADERS: [&str; 3] = [SUGGESTIONS_HEADER, IMPROVEMENTS_HEADER, SCORE_HEADER];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
    pub readability_score: u8,
}

impl Default for OptimizationReport {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            improvements: Vec::new(),
            readability_score: DEFAULT_READABILITY_SCORE,
        }
    }
}

pub fn parse_optimization(text: &str) -> OptimizationReport {
    let mut suggestions = extract_section(text, SUGGESTIONS_HEADER);
    suggestions.truncate(MAX_SUGGESTIONS);
    let mut improvements = extract_section(text, IMPROVEMENTS_HEADER);
    improvements.truncate(MAX_IMPROVEMENTS);

    OptimizationReport {
        suggestions,
        improvements,
        readability_score: extract_score(text).unwrap_or(DEFAULT_READABILITY_SCORE),
    }
}

fn extract_section(text: &str, header: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = lines.iter().position(|line| has_header(line, header)) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for line in &lines[start + 1..] {
        let line = line.trim();
        if HEADERS.iter().any(|header| has_header(line, header)) {
            break;
        }
        if let Some(item) = strip_bullet(line) {
            if !item.is_empty() {
                items.push(item.to_string());
            }
        } else if line.is_empty() || line.contains(':') {
            break;
        }
    }
    items
}

fn extract_score(text: &str) -> Option<u8> {
    let upper = text.to_ascii_uppercase();
    let start = upper.find(SCORE_HEADER)? + SCORE_HEADER.len();
    let rest = text[start..].trim_start_matches(|c: char| c.is_whitespace() || c == '*');
    let digits: String = rest.chars().take_while(char::is_ascii_digit).take(3).collect();
    let score: u8 = digits.parse().ok()?;
    (1..=10).contains(&score).then_some(score)
}

fn has_header(line: &str, header: &str) -> bool {
    line.to_ascii_uppercase().contains(header)
}

fn strip_bullet(line: &str) -> Option<&str> {
    ['-', '*', '•']
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
        .map(str::trim)
}
