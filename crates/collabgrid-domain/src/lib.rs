pub mod column;
pub mod commands;
pub mod comment;
pub mod editable;
pub mod field_update;
pub mod filter;
pub mod invariants;
pub mod mutations;
pub mod operations;
pub mod project;
pub mod reorder;
pub mod search;
pub mod selection;
pub mod store;
pub mod task;
pub mod user;

pub use column::{Column, ColumnId};
pub use comment::{Comment, CommentId};
pub use editable::TaskPatch;
pub use field_update::FieldUpdate;
pub use filter::{TaskFilter, TaskFilters};
pub use invariants::{validate_project, validate_status_column_binding};
pub use mockable::{Clock, DefaultClock};
pub use operations::BoardOperations;
pub use project::{Project, ProjectId, ProjectProgress};
pub use reorder::{MoveDirection, MoveRequest};
pub use search::{filter_columns, filter_columns_by, CompositeSearcher, TaskSearcher};
pub use store::BoardStore;
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus};
pub use user::{User, UserId, UserRole};
