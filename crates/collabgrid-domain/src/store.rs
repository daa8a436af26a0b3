//! Board store: the owner of the current project value.
//!
//! Every mutation goes through [`BoardStore::execute`], which runs a
//! [`Command`] against the current project and swaps in the result
//! wholesale. A failed command leaves the project, the selection and the
//! activity log exactly as they were.

use chrono::{DateTime, Utc};
use collabgrid_core::{BoardConfig, BoardError, BoardResult, LogEntry, Loggable, Selection};
use mockable::{Clock, DefaultClock};
use std::borrow::Cow;

use crate::{
    commands::{AddComment, AddTask, Command, CommandContext, DeleteTask, MoveTask, UpdateTask},
    filter::TaskFilters,
    operations::BoardOperations,
    project::{Project, ProjectProgress},
    reorder::{self, MoveDirection, MoveRequest},
    search,
    selection::{resolve_selected, sync_selection},
    Column, ColumnId, Task, TaskDraft, TaskId, TaskPatch, UserId,
};

pub struct BoardStore {
    project: Project,
    selection: Selection<TaskId>,
    search_query: String,
    config: BoardConfig,
    clock: Box<dyn Clock>,
    activity: Vec<LogEntry>,
}

impl BoardStore {
    pub fn new(project: Project) -> Self {
        Self::with_config(project, BoardConfig::default())
    }

    pub fn with_config(project: Project, config: BoardConfig) -> Self {
        Self {
            project,
            selection: Selection::new(),
            search_query: String::new(),
            config,
            clock: Box::new(DefaultClock),
            activity: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Run a command and, on success, replace the project with its result.
    pub fn execute(&mut self, command: &dyn Command) -> BoardResult<&Project> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let now = self.clock.utc();
        let context = CommandContext {
            config: &self.config,
            now,
        };
        let next = match command.execute(&self.project, &context) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Rejected '{}': {}", description, e);
                return Err(e);
            }
        };

        if next != self.project {
            self.project = next;
            sync_selection(&self.project, &mut self.selection);
            self.add_log(LogEntry::at(now, description));
        }
        Ok(&self.project)
    }

    pub fn add_comment(
        &mut self,
        task_id: TaskId,
        author: UserId,
        content: impl Into<String>,
    ) -> BoardResult<&Project> {
        self.execute(&AddComment {
            task_id,
            author,
            content: content.into(),
        })
    }

    /// Move the selected task one step; a step off the board edge is a no-op.
    pub fn move_selected(&mut self, direction: MoveDirection) -> BoardResult<&Project> {
        let task_id = self
            .selection
            .get()
            .ok_or_else(|| BoardError::NotFound("no task selected".to_string()))?;
        match reorder::plan_keyboard_move(&self.project, task_id, direction)? {
            Some(request) => self.execute(&MoveTask { request }),
            None => Ok(&self.project),
        }
    }

    pub fn select_task(&mut self, task_id: TaskId) -> BoardResult<&Task> {
        if !self.project.contains_task(task_id) {
            return Err(BoardError::not_found("task", task_id));
        }
        self.selection.set(task_id);
        self.selected_task()
            .ok_or_else(|| BoardError::not_found("task", task_id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The open task, resolved by id against the current project.
    pub fn selected_task(&self) -> Option<&Task> {
        resolve_selected(&self.project, &self.selection)
    }

    pub fn selection(&self) -> &Selection<TaskId> {
        &self.selection
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Columns as the board should display them under the current query.
    pub fn visible_columns(&self) -> Cow<'_, [Column]> {
        search::filter_columns(&self.project.columns, &self.search_query)
    }

    /// The visible columns narrowed further by structured filter settings.
    pub fn filtered_columns(&self, filters: &TaskFilters) -> Vec<Column> {
        let visible = self.visible_columns();
        if !filters.has_active_filters() {
            return visible.into_owned();
        }
        let filter = filters.to_filter(self.clock.utc());
        search::filter_columns_by(&visible, &filter)
    }

    pub fn progress(&self) -> ProjectProgress {
        self.project.progress()
    }

    pub fn overdue_tasks(&self) -> Vec<&Task> {
        self.project.overdue_tasks(self.clock.utc())
    }

    pub fn recent_activity(&self, limit: usize) -> Vec<&LogEntry> {
        self.recent_logs(limit)
    }
}

impl BoardOperations for BoardStore {
    fn move_task(
        &mut self,
        source_column_id: ColumnId,
        source_index: usize,
        dest_column_id: ColumnId,
        dest_index: usize,
    ) -> BoardResult<&Project> {
        self.execute(&MoveTask {
            request: MoveRequest::new(source_column_id, source_index, dest_column_id, dest_index),
        })
    }

    fn update_task(&mut self, task_id: TaskId, updates: TaskPatch) -> BoardResult<&Project> {
        self.execute(&UpdateTask { task_id, updates })
    }

    fn delete_task(&mut self, task_id: TaskId) -> BoardResult<&Project> {
        self.execute(&DeleteTask { task_id })
    }

    fn add_task(&mut self, column_id: ColumnId, draft: TaskDraft) -> BoardResult<&Project> {
        self.execute(&AddTask { column_id, draft })
    }
}

impl Loggable for BoardStore {
    fn add_log(&mut self, entry: LogEntry) {
        self.activity.push(entry);
        if self.activity.len() > self.config.activity_limit {
            let excess = self.activity.len() - self.config.activity_limit;
            self.activity.drain(..excess);
        }
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.activity
    }
}
