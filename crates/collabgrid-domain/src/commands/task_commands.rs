use super::{Command, CommandContext};
use crate::{
    mutations, reorder, ColumnId, MoveRequest, Project, TaskDraft, TaskId, TaskPatch,
    TaskPriority, UserId,
};
use collabgrid_core::BoardResult;

/// Move a task to a column position.
pub struct MoveTask {
    pub request: MoveRequest,
}

impl Command for MoveTask {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project> {
        reorder::move_task(
            project,
            &self.request,
            context.config.drop_index_policy,
            context.now,
        )
    }

    fn description(&self) -> String {
        format!(
            "Move task from column {} #{} to column {} #{}",
            self.request.source_column_id,
            self.request.source_index,
            self.request.dest_column_id,
            self.request.dest_index
        )
    }
}

/// Update task fields (title, description, priority, status, etc.)
pub struct UpdateTask {
    pub task_id: TaskId,
    pub updates: TaskPatch,
}

impl Command for UpdateTask {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project> {
        mutations::update_task(
            project,
            self.task_id,
            self.updates.clone(),
            context.config.status_policy,
            context.now,
        )
    }

    fn description(&self) -> String {
        format!("Update task {}", self.task_id)
    }
}

/// Remove a task from its column.
pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project> {
        mutations::delete_task(project, self.task_id, context.now)
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Append a new task to a column.
pub struct AddTask {
    pub column_id: ColumnId,
    pub draft: TaskDraft,
}

impl Command for AddTask {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project> {
        let default_priority =
            TaskPriority::parse(context.config.effective_default_priority()).unwrap_or_default();
        mutations::add_task(
            project,
            self.column_id,
            self.draft.clone(),
            default_priority,
            context.now,
        )
        .map(|(next, _)| next)
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.draft.title.trim())
    }
}

/// Post a comment on a task.
pub struct AddComment {
    pub task_id: TaskId,
    pub author: UserId,
    pub content: String,
}

impl Command for AddComment {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project> {
        mutations::add_comment(project, self.task_id, self.author, &self.content, context.now)
            .map(|(next, _)| next)
    }

    fn description(&self) -> String {
        format!("Comment on task {}", self.task_id)
    }
}
