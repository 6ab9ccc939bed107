use chrono::{DateTime, Local, NaiveDate};
use std::path::PathBuf;

use crate::slug::slugify;

/// Directory the static-site generator reads posts from.
/// Assumed to exist; the tool does not create it.
pub const POSTS_DIR: &str = "_posts";

/// A new post between input collection and the file write
#[derive(Debug, Clone)]
pub struct PostDraft {
    /// Raw post title as entered
    pub title: String,
    /// Author recorded in the front matter
    pub author: String,
    /// Raw categories line as entered, unparsed
    pub categories: String,
    /// Calendar date at creation, used for the filename
    pub date: NaiveDate,
    /// Full creation instant, used for the front matter
    pub timestamp: DateTime<Local>,
}

impl PostDraft {
    /// Build a draft, capturing the creation instant exactly once.
    ///
    /// Both `date` and `timestamp` come from the same `Local::now()`
    /// call so the filename and front matter cannot disagree across
    /// a midnight rollover.
    pub fn new(title: String, author: String, categories: String) -> Self {
        let now = Local::now();
        Self::at(title, author, categories, now)
    }

    /// Build a draft at a fixed instant
    pub fn at(
        title: String,
        author: String,
        categories: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            title,
            author,
            categories,
            date: timestamp.date_naive(),
            timestamp,
        }
    }

    /// Slug derived from the title
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Target path: `_posts/{YYYY-MM-DD}-{slug}.md`, relative to cwd
    pub fn path(&self) -> PathBuf {
        PathBuf::from(POSTS_DIR).join(format!(
            "{}-{}.md",
            self.date.format("%Y-%m-%d"),
            self.slug()
        ))
    }
}
