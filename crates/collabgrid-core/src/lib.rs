pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod selection;
pub mod traits;

pub use config::{BoardConfig, DropIndexPolicy, StatusPolicy};
pub use error::BoardError;
pub use logging::{LogEntry, Loggable};
pub use result::BoardResult;
pub use selection::Selection;
pub use traits::Editable;
