//! # Todd - The TODO list manager
//!
//! A command-line todo list backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Todo Management**: Add, list, edit, and delete short todo entries
//! - **Tagging**: Free-form tags, usable as filters for listing and deletion
//! - **Glob Search**: Shell-style `*`/`?` matching over todo bodies
//! - **Editor Integration**: Compose todo bodies in `$EDITOR`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todd::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
