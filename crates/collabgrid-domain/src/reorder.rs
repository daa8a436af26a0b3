//! Reorder engine.
//!
//! Pure functions that apply a position change to a project value. A move is
//! a remove-then-insert over the column list, validated up front so a failed
//! move never produces a partially written project.

use chrono::{DateTime, Utc};
use collabgrid_core::{BoardError, BoardResult, DropIndexPolicy};

use crate::{
    column::ColumnId,
    project::Project,
    task::{TaskId, TaskStatus},
};

/// Source and destination of a single task move.
///
/// When both columns are the same, `dest_index` is read against the column
/// after the task has been removed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub source_column_id: ColumnId,
    pub source_index: usize,
    pub dest_column_id: ColumnId,
    pub dest_index: usize,
}

impl MoveRequest {
    pub fn new(
        source_column_id: ColumnId,
        source_index: usize,
        dest_column_id: ColumnId,
        dest_index: usize,
    ) -> Self {
        Self {
            source_column_id,
            source_index,
            dest_column_id,
            dest_index,
        }
    }

    pub fn is_same_position(&self) -> bool {
        self.source_column_id == self.dest_column_id && self.source_index == self.dest_index
    }
}

/// Direction for keyboard-driven reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Apply `request` to `project` and return the resulting project.
///
/// The moved task takes the destination column's status and a fresh
/// `updated_at`. Moving a task onto its own position returns an unchanged
/// copy.
pub fn move_task(
    project: &Project,
    request: &MoveRequest,
    policy: DropIndexPolicy,
    now: DateTime<Utc>,
) -> BoardResult<Project> {
    let source_col = project
        .column_index(request.source_column_id)
        .ok_or_else(|| BoardError::not_found("column", request.source_column_id))?;
    let source_len = project.columns[source_col].len();
    if request.source_index >= source_len {
        return Err(BoardError::IndexOutOfRange {
            index: request.source_index,
            len: source_len,
        });
    }

    let dest_col = project
        .column_index(request.dest_column_id)
        .ok_or_else(|| BoardError::not_found("column", request.dest_column_id))?;
    let same_column = source_col == dest_col;
    let dest_len = if same_column {
        source_len - 1
    } else {
        project.columns[dest_col].len()
    };
    let dest_index = resolve_dest_index(request.dest_index, dest_len, policy)?;

    if same_column && request.source_index == dest_index {
        return Ok(project.clone());
    }

    let mut next = project.clone();
    let mut task = next.columns[source_col].tasks.remove(request.source_index);
    let dest_status = next.columns[dest_col].status;
    task.move_to_status(dest_status, now);
    next.columns[dest_col].tasks.insert(dest_index, task);
    next.touch(now);
    Ok(next)
}

fn resolve_dest_index(index: usize, len: usize, policy: DropIndexPolicy) -> BoardResult<usize> {
    if index <= len {
        return Ok(index);
    }
    match policy {
        DropIndexPolicy::Strict => Err(BoardError::IndexOutOfRange { index, len }),
        DropIndexPolicy::Clamp => Ok(len),
    }
}

/// Move a task to the end of the column bound to `status`.
///
/// Returns an unchanged copy when the task already sits in that column.
pub fn relocate_task(
    project: &Project,
    task_id: TaskId,
    status: TaskStatus,
    now: DateTime<Utc>,
) -> BoardResult<Project> {
    let (column_idx, task_idx) = project
        .locate_task(task_id)
        .ok_or_else(|| BoardError::not_found("task", task_id))?;
    let dest = project.column_for_status(status).ok_or_else(|| {
        BoardError::NotFound(format!("no column for status {}", status))
    })?;
    let source = &project.columns[column_idx];
    if source.id == dest.id {
        return Ok(project.clone());
    }
    let request = MoveRequest::new(source.id, task_idx, dest.id, dest.len());
    move_task(project, &request, DropIndexPolicy::Strict, now)
}

/// Compute the move for a keyboard step on `task_id`.
///
/// `Up`/`Down` step within the column, `Left`/`Right` append to the
/// neighbouring column. Returns `None` at the edges.
pub fn plan_keyboard_move(
    project: &Project,
    task_id: TaskId,
    direction: MoveDirection,
) -> BoardResult<Option<MoveRequest>> {
    let (column_idx, task_idx) = project
        .locate_task(task_id)
        .ok_or_else(|| BoardError::not_found("task", task_id))?;
    let column = &project.columns[column_idx];

    let plan = match direction {
        MoveDirection::Up => task_idx
            .checked_sub(1)
            .map(|dest| MoveRequest::new(column.id, task_idx, column.id, dest)),
        MoveDirection::Down => (task_idx + 1 < column.len())
            .then(|| MoveRequest::new(column.id, task_idx, column.id, task_idx + 1)),
        MoveDirection::Left => column_idx.checked_sub(1).map(|target| {
            let target = &project.columns[target];
            MoveRequest::new(column.id, task_idx, target.id, target.len())
        }),
        MoveDirection::Right => project.columns.get(column_idx + 1).map(|target| {
            MoveRequest::new(column.id, task_idx, target.id, target.len())
        }),
    };
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        invariants::validate_project,
        task::Task,
        user::{User, UserRole},
    };
    use chrono::Duration;
    use uuid::Uuid;

    fn board(todo: &[&str], done: &[&str]) -> Project {
        let owner = User::new("Owner".to_string(), String::new(), UserRole::Owner);
        let mut project = Project::new("Board".to_string(), String::new(), owner, Utc::now());
        let now = Utc::now();
        for title in todo {
            project.columns[0]
                .tasks
                .push(Task::new(title.to_string(), TaskStatus::Todo, now));
        }
        for title in done {
            project.columns[3]
                .tasks
                .push(Task::new(title.to_string(), TaskStatus::Done, now));
        }
        project
    }

    fn titles(project: &Project, column: usize) -> Vec<String> {
        project.columns[column]
            .tasks
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn test_move_across_columns() {
        let project = board(&["T1"], &[]);
        let todo = project.columns[0].id;
        let done = project.columns[3].id;
        let later = Utc::now() + Duration::minutes(1);

        let next = move_task(
            &project,
            &MoveRequest::new(todo, 0, done, 0),
            DropIndexPolicy::Strict,
            later,
        )
        .unwrap();

        assert!(next.columns[0].is_empty());
        assert_eq!(titles(&next, 3), vec!["T1"]);
        assert_eq!(next.columns[3].tasks[0].status, TaskStatus::Done);
        assert_eq!(next.columns[3].tasks[0].updated_at, later);
        assert!(validate_project(&next).is_ok());
    }

    #[test]
    fn test_same_column_downward_uses_post_removal_index() {
        let project = board(&["T1", "T2", "T3"], &[]);
        let a = project.columns[0].id;

        let next = move_task(
            &project,
            &MoveRequest::new(a, 0, a, 2),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(titles(&next, 0), vec!["T2", "T3", "T1"]);
    }

    #[test]
    fn test_adjacent_downward_drag_is_not_a_noop() {
        let project = board(&["T1", "T2", "T3"], &[]);
        let a = project.columns[0].id;

        let next = move_task(
            &project,
            &MoveRequest::new(a, 0, a, 1),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(titles(&next, 0), vec!["T2", "T1", "T3"]);
    }

    #[test]
    fn test_same_column_upward() {
        let project = board(&["T1", "T2", "T3"], &[]);
        let a = project.columns[0].id;

        let next = move_task(
            &project,
            &MoveRequest::new(a, 2, a, 0),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(titles(&next, 0), vec!["T3", "T1", "T2"]);
    }

    #[test]
    fn test_same_position_is_noop() {
        let project = board(&["T1", "T2"], &[]);
        let a = project.columns[0].id;

        let next = move_task(
            &project,
            &MoveRequest::new(a, 1, a, 1),
            DropIndexPolicy::Strict,
            Utc::now() + Duration::hours(1),
        )
        .unwrap();
        assert_eq!(next, project);
    }

    #[test]
    fn test_append_at_length() {
        let project = board(&["T1"], &["D1", "D2"]);
        let todo = project.columns[0].id;
        let done = project.columns[3].id;

        let next = move_task(
            &project,
            &MoveRequest::new(todo, 0, done, 2),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(titles(&next, 3), vec!["D1", "D2", "T1"]);
    }

    #[test]
    fn test_unknown_columns() {
        let project = board(&["T1"], &[]);
        let todo = project.columns[0].id;

        let err = move_task(
            &project,
            &MoveRequest::new(Uuid::new_v4(), 0, todo, 0),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));

        let err = move_task(
            &project,
            &MoveRequest::new(todo, 0, Uuid::new_v4(), 0),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
    }

    #[test]
    fn test_source_index_out_of_range() {
        let project = board(&["T1"], &[]);
        let todo = project.columns[0].id;
        let done = project.columns[3].id;

        let err = move_task(
            &project,
            &MoveRequest::new(todo, 1, done, 0),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn test_dest_index_strict_and_clamp() {
        let project = board(&["T1", "T2"], &["D1"]);
        let todo = project.columns[0].id;
        let done = project.columns[3].id;
        let request = MoveRequest::new(todo, 0, done, 5);

        let err = move_task(&project, &request, DropIndexPolicy::Strict, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { index: 5, len: 1 }
        ));

        let next = move_task(&project, &request, DropIndexPolicy::Clamp, Utc::now()).unwrap();
        assert_eq!(titles(&next, 3), vec!["D1", "T1"]);
    }

    #[test]
    fn test_same_column_dest_checked_against_post_removal_length() {
        let project = board(&["T1", "T2", "T3"], &[]);
        let a = project.columns[0].id;

        let err = move_task(
            &project,
            &MoveRequest::new(a, 0, a, 3),
            DropIndexPolicy::Strict,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { index: 3, len: 2 }
        ));
    }

    #[test]
    fn test_task_count_invariant_over_many_moves() {
        let project = board(&["T1", "T2", "T3", "T4"], &["D1", "D2"]);
        let ids: Vec<_> = project.columns.iter().map(|c| c.id).collect();
        let mut current = project.clone();
        let mut seed = 7usize;

        for _ in 0..200 {
            seed = seed.wrapping_mul(31).wrapping_add(11);
            let source = seed % ids.len();
            let dest = (seed / 7) % ids.len();
            let source_len = current.columns[source].len();
            if source_len == 0 {
                continue;
            }
            let source_index = (seed / 3) % source_len;
            let dest_len = if source == dest {
                source_len - 1
            } else {
                current.columns[dest].len()
            };
            let dest_index = (seed / 5) % (dest_len + 1);
            current = move_task(
                &current,
                &MoveRequest::new(ids[source], source_index, ids[dest], dest_index),
                DropIndexPolicy::Strict,
                Utc::now(),
            )
            .unwrap();
            assert_eq!(current.task_count(), project.task_count());
            assert!(validate_project(&current).is_ok());
        }
    }

    #[test]
    fn test_relocate_task_appends_to_status_column() {
        let project = board(&["T1"], &["D1"]);
        let task_id = project.columns[0].tasks[0].id;

        let next = relocate_task(&project, task_id, TaskStatus::Done, Utc::now()).unwrap();
        assert_eq!(titles(&next, 3), vec!["D1", "T1"]);
        assert_eq!(next.columns[3].tasks[1].status, TaskStatus::Done);

        let unchanged = relocate_task(&project, task_id, TaskStatus::Todo, Utc::now()).unwrap();
        assert_eq!(unchanged, project);
    }

    #[test]
    fn test_relocate_to_missing_status_column() {
        let owner = User::new("Owner".to_string(), String::new(), UserRole::Owner);
        let todo = crate::column::Column::standard(TaskStatus::Todo);
        let mut project =
            Project::with_columns("Board".to_string(), String::new(), owner, vec![todo], Utc::now()).unwrap();
        let task = Task::new("T".to_string(), TaskStatus::Todo, Utc::now());
        let task_id = task.id;
        project.columns[0].tasks.push(task);

        let err = relocate_task(&project, task_id, TaskStatus::Review, Utc::now()).unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
    }

    #[test]
    fn test_plan_keyboard_move() {
        let project = board(&["T1", "T2"], &[]);
        let todo = &project.columns[0];
        let in_progress = &project.columns[1];
        let t1 = todo.tasks[0].id;
        let t2 = todo.tasks[1].id;

        assert_eq!(plan_keyboard_move(&project, t1, MoveDirection::Up).unwrap(), None);
        assert_eq!(
            plan_keyboard_move(&project, t1, MoveDirection::Down).unwrap(),
            Some(MoveRequest::new(todo.id, 0, todo.id, 1))
        );
        assert_eq!(plan_keyboard_move(&project, t2, MoveDirection::Down).unwrap(), None);
        assert_eq!(plan_keyboard_move(&project, t2, MoveDirection::Left).unwrap(), None);
        assert_eq!(
            plan_keyboard_move(&project, t2, MoveDirection::Right).unwrap(),
            Some(MoveRequest::new(todo.id, 1, in_progress.id, 0))
        );
        assert!(plan_keyboard_move(&project, Uuid::new_v4(), MoveDirection::Up).is_err());
    }

    #[test]
    fn test_plan_right_from_last_column() {
        let project = board(&[], &["D1"]);
        let d1 = project.columns[3].tasks[0].id;
        assert_eq!(plan_keyboard_move(&project, d1, MoveDirection::Right).unwrap(), None);
        assert!(plan_keyboard_move(&project, d1, MoveDirection::Left)
            .unwrap()
            .is_some());
    }
}
