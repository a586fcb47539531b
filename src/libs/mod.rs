//! Shared building blocks used by the database layer and the CLI commands.

/// Default data-file location resolution.
pub mod data_storage;

/// External `$EDITOR` invocation for composing todo bodies.
pub mod editor;

/// User-facing message catalog and display macros.
pub mod messages;

/// Tag sequence serialization to and from the stored column value.
pub mod tags;

/// Todo entity and the boundary types of the store operations.
pub mod todo;

/// Terminal table rendering.
pub mod view;
