//! Task search and the filtered board view.
//!
//! Searchers decide whether a task matches a free-text query; the view
//! functions project columns through a searcher or filter without touching
//! the canonical project.

use std::borrow::Cow;

use crate::{filter::TaskFilter, Column, Task};

/// Trait for matching tasks against a query.
pub trait TaskSearcher {
    fn matches(&self, task: &Task) -> bool;
}

/// Lowercases the query; surrounding whitespace is part of what must match.
fn normalize(query: impl Into<String>) -> String {
    query.into().to_lowercase()
}

/// Search tasks by title (case-insensitive).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TaskSearcher for TitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
    }
}

/// Search tasks by description (case-insensitive).
pub struct DescriptionSearcher {
    query: String,
}

impl DescriptionSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }
}

impl TaskSearcher for DescriptionSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.description.to_lowercase().contains(&self.query)
    }
}

/// Matches when any tag contains the query (case-insensitive).
pub struct TagSearcher {
    query: String,
}

impl TagSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }
}

impl TaskSearcher for TagSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&self.query))
    }
}

/// Enum dispatch for searching tasks by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Description(DescriptionSearcher),
    Tag(TagSearcher),
}

impl SearchBy {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Title(s) => s.matches(task),
            Self::Description(s) => s.matches(task),
            Self::Tag(s) => s.matches(task),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all tasks).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Title, description and tag searchers over the same query.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Description(DescriptionSearcher::new(query.clone())),
                SearchBy::Tag(TagSearcher::new(query)),
            ],
        }
    }

    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSearcher for CompositeSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(task))
    }
}

/// Filter every column by a free-text query.
///
/// A blank query borrows the input unchanged. Otherwise each column is
/// rebuilt with only the tasks whose title, description or a tag contains the
/// query; columns left with no tasks are kept.
pub fn filter_columns<'a>(columns: &'a [Column], query: &str) -> Cow<'a, [Column]> {
    if query.trim().is_empty() {
        return Cow::Borrowed(columns);
    }
    let searcher = CompositeSearcher::all(query);
    Cow::Owned(project_columns(columns, |task| searcher.matches(task)))
}

/// Filter every column through a structured filter, keeping empty columns.
pub fn filter_columns_by(columns: &[Column], filter: &dyn TaskFilter) -> Vec<Column> {
    project_columns(columns, |task| filter.matches(task))
}

fn project_columns(columns: &[Column], keep: impl Fn(&Task) -> bool) -> Vec<Column> {
    columns
        .iter()
        .map(|column| {
            column.with_tasks(
                column
                    .tasks
                    .iter()
                    .filter(|&task| keep(task))
                    .cloned()
                    .collect(),
            )
        })
        .collect()
}
