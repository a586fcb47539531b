//! Database layer for the todd application.
//!
//! Built on SQLite via `rusqlite`. One file, one table: every todo entry is a
//! row of `id`, `body` and `tags`, where `tags` holds the pipe-joined encoding
//! from [`crate::libs::tags`]. The schema is created on first open and the
//! statement set is kept deliberately small.
//!
//! Concurrent access from other processes is left to SQLite's own file-level
//! locking (one writer at a time, readers coexist); nothing is retried or
//! coordinated on top of it.

/// Core database connection handling.
pub mod db;

/// Todo entry storage and the CRUD/search operations.
pub mod todos;
