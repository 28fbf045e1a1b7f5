//! URL-safe identifiers for posts and categories.
//!
//! Slugs are not unique on their own; collision handling belongs to whatever
//! persists them.

/// Lowercase `input` and collapse every run of characters outside `[a-z0-9]`
/// into a single hyphen, with no hyphen at either end.
///
/// Applying it twice yields the same result as applying it once.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
