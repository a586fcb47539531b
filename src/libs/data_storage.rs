use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "todd.db";

/// Base directory holding the database file.
///
/// The environment is consulted exactly once, in [`DataStorage::resolve`];
/// everything downstream works with the resolved value. There is no fallback
/// to a relative or temporary path: with neither variable set, resolution
/// fails.
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the data directory from `$XDG_DATA_HOME`, falling back to
    /// `$HOME/.local/share`.
    pub fn resolve() -> Result<Self> {
        Self::from_env(var("XDG_DATA_HOME").ok(), var("HOME").ok())
    }

    /// Pure resolution logic, separated so tests can inject values instead of
    /// mutating the process environment.
    pub fn from_env(data_home: Option<String>, home: Option<String>) -> Result<Self> {
        let base_path = match (data_home, home) {
            (Some(data_home), _) => PathBuf::from(data_home),
            (None, Some(home)) => Path::new(&home).join(".local").join("share"),
            (None, None) => return Err(msg_error_anyhow!(Message::NoDataDir)),
        };

        Ok(Self { base_path })
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
