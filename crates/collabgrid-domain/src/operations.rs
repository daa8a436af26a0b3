use collabgrid_core::BoardResult;

use crate::{ColumnId, Project, TaskDraft, TaskId, TaskPatch};

/// The command surface a presentation layer drives the board through.
///
/// Drag-and-drop, keyboard reordering and API callers all land on the same
/// four operations.
pub trait BoardOperations {
    fn move_task(
        &mut self,
        source_column_id: ColumnId,
        source_index: usize,
        dest_column_id: ColumnId,
        dest_index: usize,
    ) -> BoardResult<&Project>;
    fn update_task(&mut self, task_id: TaskId, updates: TaskPatch) -> BoardResult<&Project>;
    fn delete_task(&mut self, task_id: TaskId) -> BoardResult<&Project>;
    fn add_task(&mut self, column_id: ColumnId, draft: TaskDraft) -> BoardResult<&Project>;
}
