use crate::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_ACTIVITY_LIMIT: usize = 200;

/// How `update_task` treats a status that disagrees with the containing column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// Write the status without moving the task.
    #[default]
    InPlace,
    /// Move the task to the end of the column matching the new status.
    Relocate,
    /// Refuse the update.
    Reject,
}

/// How the reorder engine treats a destination index past the end of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropIndexPolicy {
    #[default]
    Strict,
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub status_policy: StatusPolicy,
    #[serde(default)]
    pub drop_index_policy: DropIndexPolicy,
    #[serde(default)]
    pub default_priority: Option<String>,
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

fn default_activity_limit() -> usize {
    DEFAULT_ACTIVITY_LIMIT
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::default(),
            drop_index_policy: DropIndexPolicy::default(),
            default_priority: None,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/collabgrid/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("collabgrid/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("collabgrid\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring config at {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BoardError::Config(e.to_string()))
    }

    pub fn effective_default_priority(&self) -> &str {
        self.default_priority.as_deref().unwrap_or("medium")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.status_policy, StatusPolicy::InPlace);
        assert_eq!(config.drop_index_policy, DropIndexPolicy::Strict);
        assert_eq!(config.effective_default_priority(), "medium");
        assert_eq!(config.activity_limit, 200);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "status_policy = \"relocate\"").unwrap();
        writeln!(file, "default_priority = \"high\"").unwrap();

        let config = BoardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.status_policy, StatusPolicy::Relocate);
        assert_eq!(config.drop_index_policy, DropIndexPolicy::Strict);
        assert_eq!(config.effective_default_priority(), "high");
        assert_eq!(config.activity_limit, 200);
    }

    #[test]
    fn test_load_from_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "status_policy = \"reject\"\ndrop_index_policy = \"clamp\"\nactivity_limit = 5"
        )
        .unwrap();

        let config = BoardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.status_policy, StatusPolicy::Reject);
        assert_eq!(config.drop_index_policy, DropIndexPolicy::Clamp);
        assert_eq!(config.activity_limit, 5);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "status_policy = \"sideways\"").unwrap();

        let err = BoardConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }
}
