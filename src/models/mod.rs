//! Data models module
//!
//! Defines the PostDraft entity: the in-memory representation of a
//! new post between input collection and the single file write.

pub mod draft;

pub use draft::PostDraft;
