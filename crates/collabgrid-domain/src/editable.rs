use chrono::{DateTime, Utc};
use collabgrid_core::Editable;
use std::collections::BTreeSet;

use crate::{
    comment::Comment,
    field_update::FieldUpdate,
    task::{Task, TaskPriority, TaskStatus},
    user::UserId,
};

/// Partial update for a task: every `None`/`NoChange` field is left alone.
///
/// `comments` replaces the whole list, which is how the comment flow appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assignees: Option<Vec<UserId>>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
    pub tags: Option<BTreeSet<String>>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<String>>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<UserId>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    pub fn with_due_date(mut self, due_date: FieldUpdate<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Split off the status so the caller can route it separately.
    pub fn take_status(&mut self) -> Option<TaskStatus> {
        self.status.take()
    }
}

impl Editable<Task> for TaskPatch {
    fn from_entity(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            priority: Some(task.priority),
            status: Some(task.status),
            assignees: Some(task.assignees.clone()),
            due_date: task.due_date.into(),
            tags: Some(task.tags.clone()),
            comments: Some(task.comments.clone()),
            attachments: Some(task.attachments.clone()),
        }
    }

    /// Shallow merge. Timestamps are left to the caller.
    fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignees) = self.assignees {
            task.set_assignees(assignees);
        }
        self.due_date.apply_to(&mut task.due_date);
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(comments) = self.comments {
            task.comments = comments;
        }
        if let Some(attachments) = self.attachments {
            task.attachments = attachments;
        }
    }
}
