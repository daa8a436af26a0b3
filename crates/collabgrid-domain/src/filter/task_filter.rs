//! Task filter implementations.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::{Task, TaskPriority, UserId};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    fn matches(&self, task: &Task) -> bool;
}

/// Matches tasks with any of the given priorities.
pub struct PriorityFilter {
    priorities: HashSet<TaskPriority>,
}

impl PriorityFilter {
    pub fn new(priority: TaskPriority) -> Self {
        Self::any_of(std::iter::once(priority))
    }

    pub fn any_of(priorities: impl IntoIterator<Item = TaskPriority>) -> Self {
        Self {
            priorities: priorities.into_iter().collect(),
        }
    }
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        self.priorities.contains(&task.priority)
    }
}

/// Matches tasks assigned to any of the given users.
pub struct AssigneeFilter {
    user_ids: HashSet<UserId>,
}

impl AssigneeFilter {
    pub fn new(user_id: UserId) -> Self {
        Self::any_of(std::iter::once(user_id))
    }

    pub fn any_of(user_ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            user_ids: user_ids.into_iter().collect(),
        }
    }
}

impl TaskFilter for AssigneeFilter {
    fn matches(&self, task: &Task) -> bool {
        task.assignees.iter().any(|id| self.user_ids.contains(id))
    }
}

/// Matches tasks carrying any of the given tags (exact, case-insensitive).
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    pub fn any_of(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl TaskFilter for TagFilter {
    fn matches(&self, task: &Task) -> bool {
        self.tags.iter().any(|tag| task.has_tag(tag))
    }
}

/// Matches tasks past their due date as of `now`.
pub struct OverdueFilter {
    now: DateTime<Utc>,
}

impl OverdueFilter {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl TaskFilter for OverdueFilter {
    fn matches(&self, task: &Task) -> bool {
        task.is_overdue(self.now)
    }
}

/// Combine multiple filters with AND logic.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}
