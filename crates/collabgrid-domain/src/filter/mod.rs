//! Structured task filtering.
//!
//! Provides the TaskFilter trait, filter implementations, and the
//! TaskFilters settings struct that builds a composite filter.

pub mod task_filter;
pub mod task_filters;

pub use task_filter::{
    AssigneeFilter, CompositeFilter, OverdueFilter, PriorityFilter, TagFilter, TaskFilter,
};
pub use task_filters::TaskFilters;
