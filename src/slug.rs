//! Slug computation module
//!
//! Derives filesystem-safe, URL-safe slugs from post titles.
//! The algorithm must stay byte-for-byte stable so generated
//! filenames line up with any posts the site already has.

/// Compute the slug for a post title.
///
/// Lowercases the title (ASCII folding), replaces each run of
/// whitespace with a single hyphen, then drops every remaining
/// character outside `[a-z0-9-]`. Consecutive hyphens are not
/// collapsed and leading/trailing hyphens are not trimmed.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_ascii_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            slug.push('-');
            in_whitespace = false;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            slug.push(ch);
        }
    }

    // A trailing whitespace run still maps to one hyphen
    if in_whitespace {
        slug.push('-');
    }

    slug
}
