//! Filter settings chosen by the user.
//!
//! Holds what to filter by, as opposed to the TaskFilter implementations
//! that perform the filtering.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::task_filter::{
    AssigneeFilter, CompositeFilter, OverdueFilter, PriorityFilter, TagFilter,
};
use crate::{TaskPriority, UserId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilters {
    pub selected_priorities: HashSet<TaskPriority>,
    pub selected_assignees: HashSet<UserId>,
    pub selected_tags: HashSet<String>,
    pub overdue_only: bool,
}

impl TaskFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.selected_priorities.is_empty()
            || !self.selected_assignees.is_empty()
            || !self.selected_tags.is_empty()
            || self.overdue_only
    }

    pub fn clear(&mut self) {
        self.selected_priorities.clear();
        self.selected_assignees.clear();
        self.selected_tags.clear();
        self.overdue_only = false;
    }

    /// Build the AND-composite for the active settings, evaluated at `now`.
    pub fn to_filter(&self, now: DateTime<Utc>) -> CompositeFilter {
        let mut filter = CompositeFilter::new();
        if !self.selected_priorities.is_empty() {
            filter = filter.with_filter(Box::new(PriorityFilter::any_of(
                self.selected_priorities.iter().copied(),
            )));
        }
        if !self.selected_assignees.is_empty() {
            filter = filter.with_filter(Box::new(AssigneeFilter::any_of(
                self.selected_assignees.iter().copied(),
            )));
        }
        if !self.selected_tags.is_empty() {
            filter = filter.with_filter(Box::new(TagFilter::any_of(
                self.selected_tags.iter().cloned(),
            )));
        }
        if self.overdue_only {
            filter = filter.with_filter(Box::new(OverdueFilter::new(now)));
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TaskFilter;
    use crate::{Task, TaskStatus};

    #[test]
    fn test_default_has_no_active_filters() {
        let filters = TaskFilters::default();
        assert!(!filters.has_active_filters());
        assert!(filters.to_filter(Utc::now()).is_empty());
    }

    #[test]
    fn test_to_filter_combines_settings() {
        let mut filters = TaskFilters::new();
        filters.selected_priorities.insert(TaskPriority::High);
        filters.selected_tags.insert("design".to_string());
        assert!(filters.has_active_filters());

        let mut task = Task::new("T".to_string(), TaskStatus::Todo, Utc::now());
        task.priority = TaskPriority::High;
        let filter = filters.to_filter(Utc::now());
        assert!(!filter.matches(&task));

        task.tags.insert("Design".to_string());
        assert!(filter.matches(&task));
    }

    #[test]
    fn test_clear_filters() {
        let mut filters = TaskFilters::new();
        filters.overdue_only = true;
        filters.selected_assignees.insert(uuid::Uuid::new_v4());
        filters.clear();
        assert!(!filters.has_active_filters());
    }
}
