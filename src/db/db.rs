use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file at the given path.
    ///
    /// The path is used verbatim; resolving a default location from the
    /// environment is the caller's job (see [`crate::libs::data_storage`]).
    pub fn open(db_file: &Path) -> Result<Db> {
        let conn: Connection = Connection::open(db_file)?;

        Ok(Db { conn })
    }
}
