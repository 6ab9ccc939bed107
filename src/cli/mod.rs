//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - new: Scaffold a new blog post file

pub mod new;
