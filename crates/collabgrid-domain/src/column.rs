use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskId, TaskStatus};

pub type ColumnId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub color: String,
}

impl Column {
    pub fn new(title: String, status: TaskStatus, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            status,
            tasks: Vec::new(),
            color,
        }
    }

    /// The standard column for a workflow stage.
    pub fn standard(status: TaskStatus) -> Self {
        let (title, color) = match status {
            TaskStatus::Todo => ("To Do", "hsl(var(--muted))"),
            TaskStatus::InProgress => ("In Progress", "hsl(199 89% 48%)"),
            TaskStatus::Review => ("Review", "hsl(38 92% 50%)"),
            TaskStatus::Done => ("Done", "hsl(142 76% 36%)"),
        };
        Self::new(title.to_string(), status, color.to_string())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    /// Same metadata, different task list.
    pub fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            status: self.status,
            tasks,
            color: self.color.clone(),
        }
    }
}
