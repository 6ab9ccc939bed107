//! Front-matter renderer module
//!
//! Generates the fixed front-matter block the static-site generator
//! expects at the top of every post. Field values are embedded
//! verbatim; nothing is escaped.

use crate::models::PostDraft;

/// Render the complete initial file content for a draft:
/// the delimited front-matter block followed by one blank line.
pub fn render(draft: &PostDraft) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str("layout: post\n");
    output.push_str(&format!("title: {}\n", draft.title));
    output.push_str(&format!(
        "date: {}\n",
        draft.timestamp.format("%Y-%m-%d %H:%M:%S %z")
    ));
    output.push_str(&format!("author: {}\n", draft.author));
    output.push_str(&format!("categories: {}\n", draft.categories));
    output.push_str("---\n");
    output.push('\n');

    output
}
