use chrono::{DateTime, Utc};
use collabgrid_core::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    column::{Column, ColumnId},
    task::{Task, TaskId, TaskStatus},
    user::{User, UserId},
};

pub type ProjectId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub owner: User,
    #[serde(default)]
    pub members: Vec<User>,
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Completion summary shown on the board header and the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectProgress {
    pub total: usize,
    pub completed: usize,
    /// Rounded to the nearest whole percent; 0 for an empty board.
    pub percent: u8,
}

impl ProjectProgress {
    fn new(total: usize, completed: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((completed * 100 + total / 2) / total).min(100) as u8
        };
        Self {
            total,
            completed,
            percent,
        }
    }
}

impl Project {
    /// A project with the four standard workflow columns, created at `now`.
    pub fn new(name: String, description: String, owner: User, now: DateTime<Utc>) -> Self {
        let columns = TaskStatus::ALL.into_iter().map(Column::standard).collect();
        Self::build(name, description, owner, columns, now)
    }

    /// A project with a custom column layout. Each status may back at most
    /// one column and column ids must be unique.
    pub fn with_columns(
        name: String,
        description: String,
        owner: User,
        columns: Vec<Column>,
        now: DateTime<Utc>,
    ) -> BoardResult<Self> {
        let mut statuses = HashSet::new();
        let mut ids = HashSet::new();
        for column in &columns {
            if !statuses.insert(column.status) {
                return Err(BoardError::Validation(format!(
                    "status {} is mapped to more than one column",
                    column.status
                )));
            }
            if !ids.insert(column.id) {
                return Err(BoardError::Validation(format!(
                    "duplicate column id {}",
                    column.id
                )));
            }
        }
        Ok(Self::build(name, description, owner, columns, now))
    }

    fn build(
        name: String,
        description: String,
        owner: User,
        columns: Vec<Column>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            owner,
            members: Vec::new(),
            columns,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_member(&mut self, user: User) {
        if !self.is_member(user.id) {
            self.members.push(user);
        }
    }

    /// The owner counts as a member even when absent from `members`.
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.owner.id == user_id || self.members.iter().any(|m| m.id == user_id)
    }

    pub fn member(&self, user_id: UserId) -> Option<&User> {
        if self.owner.id == user_id {
            return Some(&self.owner);
        }
        self.members.iter().find(|m| m.id == user_id)
    }

    /// Owner first, then the listed members without repeating the owner.
    pub fn all_members(&self) -> Vec<User> {
        std::iter::once(self.owner.clone())
            .chain(
                self.members
                    .iter()
                    .filter(|m| m.id != self.owner.id)
                    .cloned(),
            )
            .collect()
    }

    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    pub fn column_for_status(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Column index and position within that column.
    pub fn locate_task(&self, task_id: TaskId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(column_idx, column)| {
            column
                .position_of(task_id)
                .map(|task_idx| (column_idx, task_idx))
        })
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks().find(|t| t.id == task_id)
    }

    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.locate_task(task_id).is_some()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn progress(&self) -> ProjectProgress {
        let completed = self
            .column_for_status(TaskStatus::Done)
            .map_or(0, Column::len);
        ProjectProgress::new(self.task_count(), completed)
    }

    pub fn overdue_tasks(&self, now: DateTime<Utc>) -> Vec<&Task> {
        self.tasks().filter(|t| t.is_overdue(now)).collect()
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
