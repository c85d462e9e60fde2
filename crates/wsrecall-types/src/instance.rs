use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One installed editor variant (stable, insiders, a fork, ...) and the
/// directory holding its persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInstance {
    pub name: String,
    #[serde(default)]
    pub channel: Option<String>,
    pub app_data: PathBuf,
}

impl EditorInstance {
    pub fn new(name: impl Into<String>, app_data: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            channel: None,
            app_data: app_data.into(),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn app_data(&self) -> &Path {
        &self.app_data
    }

    /// Legacy flat history file
    pub fn storage_json_path(&self) -> PathBuf {
        self.app_data.join("storage.json")
    }

    /// Embedded key-value database used by newer editor versions
    pub fn state_db_path(&self) -> PathBuf {
        self.app_data
            .join("User")
            .join("globalStorage")
            .join("state.vscdb")
    }
}

impl fmt::Display for EditorInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.channel {
            Some(channel) => write!(f, "{} ({})", self.name, channel),
            None => write!(f, "{}", self.name),
        }
    }
}
