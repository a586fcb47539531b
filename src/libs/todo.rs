use serde::{Deserialize, Serialize};

/// One stored todo entry. The body is kept verbatim, newlines included; only
/// rendering decides how much of it to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub body: String,
    pub tags: Vec<String>,
}

impl Todo {
    /// First line of the body, for compact one-row display.
    pub fn first_line(&self) -> &str {
        self.body.lines().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum TodoFilter {
    All,
    /// Entries carrying at least one of the given tags.
    ByTags(Vec<String>),
}

/// Outcome of an edit. A missing id is an ordinary result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Updated,
    NotFound,
}

/// What a delete call should remove: a set of ids, a set of tags, or both.
/// When both are given the union of the two matches is deleted. An empty
/// selector is rejected by the store.
#[derive(Debug, Default, Clone)]
pub struct DeleteSelector {
    pub ids: Vec<i64>,
    pub tags: Vec<String>,
}

impl DeleteSelector {
    pub fn new(ids: Vec<i64>, tags: Vec<String>) -> Self {
        Self { ids, tags }
    }

    pub fn by_ids(ids: Vec<i64>) -> Self {
        Self { ids, tags: Vec::new() }
    }

    pub fn by_tags(tags: Vec<String>) -> Self {
        Self { ids: Vec::new(), tags }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.tags.is_empty()
    }
}
