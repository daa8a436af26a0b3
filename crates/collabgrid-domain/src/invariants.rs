//! Structural checks over a project value.
//!
//! Diagnostic only: the reorder engine and the store keep these true on
//! their own, tests use them to prove it.

use collabgrid_core::{BoardError, BoardResult};
use std::collections::HashSet;

use crate::project::Project;

/// Every task's status must equal the status of the column holding it.
pub fn validate_status_column_binding(project: &Project) -> BoardResult<()> {
    for column in &project.columns {
        if let Some(task) = column.tasks.iter().find(|t| t.status != column.status) {
            return Err(BoardError::InvariantViolation(format!(
                "task {} has status {} but sits in column '{}' ({})",
                task.id, task.status, column.title, column.status
            )));
        }
    }
    Ok(())
}

/// Binding check plus identity rules: unique column ids, one column per
/// status, unique task ids across the project, no repeated assignees.
pub fn validate_project(project: &Project) -> BoardResult<()> {
    validate_status_column_binding(project)?;

    let mut column_ids = HashSet::new();
    let mut statuses = HashSet::new();
    let mut task_ids = HashSet::new();

    for column in &project.columns {
        if !column_ids.insert(column.id) {
            return Err(BoardError::InvariantViolation(format!(
                "column id {} appears more than once",
                column.id
            )));
        }
        if !statuses.insert(column.status) {
            return Err(BoardError::InvariantViolation(format!(
                "status {} is mapped to more than one column",
                column.status
            )));
        }
        for task in &column.tasks {
            if !task_ids.insert(task.id) {
                return Err(BoardError::InvariantViolation(format!(
                    "task {} appears more than once",
                    task.id
                )));
            }
            let unique_assignees: HashSet<_> = task.assignees.iter().collect();
            if unique_assignees.len() != task.assignees.len() {
                return Err(BoardError::InvariantViolation(format!(
                    "task {} lists an assignee twice",
                    task.id
                )));
            }
        }
    }
    Ok(())
}
