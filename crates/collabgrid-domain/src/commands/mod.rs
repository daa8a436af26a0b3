use chrono::{DateTime, Utc};
use collabgrid_core::{BoardConfig, BoardResult};

use crate::Project;

pub mod task_commands;

pub use task_commands::*;

/// A board command: takes the current project and produces the next one.
///
/// Commands never mutate their input, so a failed command leaves the board
/// exactly as it was.
pub trait Command {
    fn execute(&self, project: &Project, context: &CommandContext) -> BoardResult<Project>;

    /// Human-readable description of what this command does.
    fn description(&self) -> String;
}

/// Settings and timestamp shared by every command in one execution.
pub struct CommandContext<'a> {
    pub config: &'a BoardConfig,
    pub now: DateTime<Utc>,
}
