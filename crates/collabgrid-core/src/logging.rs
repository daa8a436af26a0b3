use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming a file that receives debug-level traces.
pub const DEBUG_LOG_ENV: &str = "COLLABGRID_DEBUG_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: String) -> Self {
        Self::at(Utc::now(), message)
    }

    pub fn at(timestamp: DateTime<Utc>, message: String) -> Self {
        Self { timestamp, message }
    }
}

pub trait Loggable {
    fn add_log(&mut self, entry: LogEntry);
    fn get_logs(&self) -> &[LogEntry];

    /// The `limit` most recent entries, newest first.
    fn recent_logs(&self, limit: usize) -> Vec<&LogEntry> {
        self.get_logs().iter().rev().take(limit).collect()
    }
}

/// Install a global fmt subscriber for the embedding application.
///
/// With `COLLABGRID_DEBUG_LOG` set, debug output including file and line goes
/// to that file; otherwise warnings go to stderr. `RUST_LOG` overrides the
/// default level in both cases. Calling this twice is harmless.
pub fn init_tracing() -> std::io::Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(log_file))
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Journal {
        entries: Vec<LogEntry>,
    }

    impl Loggable for Journal {
        fn add_log(&mut self, entry: LogEntry) {
            self.entries.push(entry);
        }

        fn get_logs(&self) -> &[LogEntry] {
            &self.entries
        }
    }

    #[test]
    fn test_recent_logs_newest_first() {
        let mut journal = Journal { entries: vec![] };
        journal.add_log(LogEntry::new("first".to_string()));
        journal.add_log(LogEntry::new("second".to_string()));
        journal.add_log(LogEntry::new("third".to_string()));

        let recent = journal.recent_logs(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "third");
        assert_eq!(recent[1].message, "second");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        assert!(init_tracing().is_ok());
        assert!(init_tracing().is_ok());
    }
}
