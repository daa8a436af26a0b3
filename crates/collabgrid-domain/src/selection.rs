//! Keeps the open-task reference coherent with the current project.

use collabgrid_core::Selection;

use crate::{project::Project, task::Task, task::TaskId};

/// Resolve the selected id against `project`.
pub fn resolve_selected<'a>(project: &'a Project, selection: &Selection<TaskId>) -> Option<&'a Task> {
    selection.get().and_then(|id| project.find_task(id))
}

/// Run after every mutation: drops the selection when its task is gone.
///
/// Returns true when the selection was cleared.
pub fn sync_selection(project: &Project, selection: &mut Selection<TaskId>) -> bool {
    let cleared = selection.retain(|id| project.contains_task(id));
    if cleared {
        tracing::debug!("Selected task no longer exists; selection cleared");
    }
    cleared
}
