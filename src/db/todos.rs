use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::tags;
use crate::libs::todo::{DeleteSelector, EditStatus, Todo, TodoFilter};
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

// AUTOINCREMENT keeps ids monotonic for the lifetime of the file; an id freed
// by a delete is never handed out again.
const SCHEMA_TODOS: &str = "CREATE TABLE IF NOT EXISTS todo (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    body TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT ''
);";
const INSERT_TODO: &str = "INSERT INTO todo (body, tags) VALUES (?1, ?2)";
const SELECT_TODOS: &str = "SELECT id, body, tags FROM todo";
const SELECT_TODO_BY_ID: &str = "SELECT id, body, tags FROM todo WHERE id = ?1";
const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todo";
const UPDATE_BODY: &str = "UPDATE todo SET body = ?2 WHERE id = ?1";
const UPDATE_TAGS: &str = "UPDATE todo SET tags = ?2 WHERE id = ?1";
const DELETE_TODOS: &str = "DELETE FROM todo";
const WHERE_BODY_GLOB: &str = "WHERE body GLOB ?1";
const WHERE_BODY_EXACT: &str = "WHERE body = ?1";
const WHERE_ID_IN: &str = "WHERE id IN";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct Todos {
    conn: Connection,
}

impl Todos {
    /// Opens the todo store at `db_file`, creating the file and schema when
    /// absent. Re-opening an existing file is a no-op beyond the open itself.
    pub fn new(db_file: &Path) -> Result<Todos> {
        msg_debug!(format!("Opening todo database at {}", db_file.display()));
        let db = Db::open(db_file)?;
        db.conn.execute(SCHEMA_TODOS, [])?;

        Ok(Todos { conn: db.conn })
    }

    /// Number of stored entries.
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_TODOS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Inserts a new entry and returns its assigned id.
    ///
    /// The body is stored verbatim, newlines included; no validation is
    /// applied here.
    pub fn add(&mut self, body: &str, tags_list: &[String]) -> Result<i64> {
        self.conn.execute(INSERT_TODO, params![body, tags::encode(tags_list)])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Looks up a single entry; a missing id yields `None`, not an error.
    pub fn get(&mut self, id: i64) -> Result<Option<Todo>> {
        self.conn
            .query_row(SELECT_TODO_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Fetches entries in ascending-id order.
    ///
    /// `TodoFilter::ByTags` keeps only entries carrying at least one of the
    /// given tags (OR semantics).
    pub fn fetch(&mut self, filter: TodoFilter) -> Result<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TODOS, ORDER_BY_ID))?;
        let todo_iter = stmt.query_map([], Self::map_row)?;
        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        if let TodoFilter::ByTags(wanted) = &filter {
            todos.retain(|todo| todo.tags.iter().any(|tag| wanted.contains(tag)));
        }

        Ok(todos)
    }

    /// Searches entry bodies, in ascending-id order.
    ///
    /// With `wildcards` the term is matched with SQLite's `GLOB`: `*` matches
    /// any run of characters, `?` exactly one, comparison is case-sensitive,
    /// and a term without metacharacters only matches a body equal to it.
    /// Without `wildcards` the term is compared literally. Zero matches is an
    /// empty result, never an error.
    pub fn search(&mut self, term: &str, wildcards: bool) -> Result<Vec<Todo>> {
        let clause = if wildcards { WHERE_BODY_GLOB } else { WHERE_BODY_EXACT };
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TODOS, clause, ORDER_BY_ID))?;
        let todo_iter = stmt.query_map(params![term], Self::map_row)?;
        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }

        Ok(todos)
    }

    /// Updates only the supplied fields of an entry; `tags_list` replaces the
    /// stored tag sequence wholesale. A missing id is reported as
    /// `EditStatus::NotFound` rather than an error.
    pub fn edit(&mut self, id: i64, body: Option<&str>, tags_list: Option<&[String]>) -> Result<EditStatus> {
        if self.get(id)?.is_none() {
            return Ok(EditStatus::NotFound);
        }
        if let Some(body) = body {
            self.conn.execute(UPDATE_BODY, params![id, body])?;
        }
        if let Some(tags_list) = tags_list {
            self.conn.execute(UPDATE_TAGS, params![id, tags::encode(tags_list)])?;
        }

        Ok(EditStatus::Updated)
    }

    /// Deletes every entry matched by the selector: the union of the listed
    /// ids and all entries carrying any of the listed tags. Matching rows are
    /// collected and removed inside one transaction.
    ///
    /// An empty selector is a contract violation and fails without touching
    /// the table. Ids or tags that match nothing are fine; the number of rows
    /// actually removed is returned.
    pub fn delete(&mut self, selector: &DeleteSelector) -> Result<usize> {
        if selector.is_empty() {
            msg_bail_anyhow!(Message::DeleteSelectorMissing);
        }

        let tx = self.conn.transaction()?;
        let mut doomed = selector.ids.clone();
        if !selector.tags.is_empty() {
            let mut stmt = tx.prepare(SELECT_TODOS)?;
            let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(2)?)))?;
            for row in rows {
                let (id, raw_tags) = row?;
                if tags::decode(&raw_tags).iter().any(|tag| selector.tags.contains(tag)) {
                    doomed.push(id);
                }
            }
        }
        doomed.sort_unstable();
        doomed.dedup();

        let affected = if doomed.is_empty() {
            0
        } else {
            msg_debug!(format!("Deleting todos with ids {:?}", doomed));
            tx.execute(
                &format!("{} {} ({})", DELETE_TODOS, WHERE_ID_IN, vec!["?"; doomed.len()].join(", ")),
                params_from_iter(doomed.iter()),
            )?
        };
        tx.commit()?;

        Ok(affected)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
        Ok(Todo {
            id: row.get(0)?,
            body: row.get(1)?,
            tags: tags::decode(&row.get::<_, String>(2)?),
        })
    }
}
