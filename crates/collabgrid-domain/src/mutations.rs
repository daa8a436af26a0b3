//! Task mutations as pure project-to-project functions.

use chrono::{DateTime, Utc};
use collabgrid_core::{BoardError, BoardResult, Editable, StatusPolicy};

use crate::{
    column::ColumnId,
    comment::{Comment, CommentId},
    editable::TaskPatch,
    project::Project,
    reorder::relocate_task,
    task::{Task, TaskDraft, TaskId, TaskPriority},
    user::UserId,
};

/// Merge `patch` into the task and refresh its `updated_at`.
///
/// A status that differs from the containing column's status is handled
/// according to `policy`.
pub fn update_task(
    project: &Project,
    task_id: TaskId,
    mut patch: TaskPatch,
    policy: StatusPolicy,
    now: DateTime<Utc>,
) -> BoardResult<Project> {
    let (column_idx, task_idx) = project
        .locate_task(task_id)
        .ok_or_else(|| BoardError::not_found("task", task_id))?;
    let column_status = project.columns[column_idx].status;

    let relocate_to = match patch.take_status() {
        Some(status) if status == column_status => {
            patch.status = Some(status);
            None
        }
        Some(status) => match policy {
            StatusPolicy::InPlace => {
                patch.status = Some(status);
                None
            }
            StatusPolicy::Relocate => Some(status),
            StatusPolicy::Reject => {
                return Err(BoardError::InvariantViolation(format!(
                    "status {} does not match column status {}; move the task instead",
                    status, column_status
                )));
            }
        },
        None => None,
    };

    let mut next = project.clone();
    let task = &mut next.columns[column_idx].tasks[task_idx];
    patch.apply_to(task);
    task.touch(now);
    next.touch(now);

    match relocate_to {
        Some(status) => relocate_task(&next, task_id, status, now),
        None => Ok(next),
    }
}

pub fn delete_task(project: &Project, task_id: TaskId, now: DateTime<Utc>) -> BoardResult<Project> {
    let (column_idx, task_idx) = project
        .locate_task(task_id)
        .ok_or_else(|| BoardError::not_found("task", task_id))?;
    let mut next = project.clone();
    next.columns[column_idx].tasks.remove(task_idx);
    next.touch(now);
    Ok(next)
}

/// Append a new task built from `draft` to the end of `column_id`.
pub fn add_task(
    project: &Project,
    column_id: ColumnId,
    draft: TaskDraft,
    default_priority: TaskPriority,
    now: DateTime<Utc>,
) -> BoardResult<(Project, TaskId)> {
    let column_idx = project
        .column_index(column_id)
        .ok_or_else(|| BoardError::not_found("column", column_id))?;
    if draft.title.trim().is_empty() {
        return Err(BoardError::Validation("task title must not be empty".to_string()));
    }

    let status = project.columns[column_idx].status;
    let mut task = Task::from_draft(draft, status, default_priority, now);
    while project.contains_task(task.id) {
        task.id = uuid::Uuid::new_v4();
    }
    let task_id = task.id;

    let mut next = project.clone();
    next.columns[column_idx].tasks.push(task);
    next.touch(now);
    Ok((next, task_id))
}

/// Append a comment by `author` to the task, resolving mentions against the
/// project's members.
pub fn add_comment(
    project: &Project,
    task_id: TaskId,
    author: UserId,
    content: &str,
    now: DateTime<Utc>,
) -> BoardResult<(Project, CommentId)> {
    let task = project
        .find_task(task_id)
        .ok_or_else(|| BoardError::not_found("task", task_id))?;
    if !project.is_member(author) {
        return Err(BoardError::not_found("user", author));
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(BoardError::Validation("comment must not be empty".to_string()));
    }

    let comment = Comment::new(author, content.to_string(), &project.all_members(), now);
    let comment_id = comment.id;
    let mut comments = task.comments.clone();
    comments.push(comment);

    let next = update_task(
        project,
        task_id,
        TaskPatch::new().with_comments(comments),
        StatusPolicy::InPlace,
        now,
    )?;
    Ok((next, comment_id))
}
