use crate::Result;
use std::path::PathBuf;
use wsrecall_types::EditorInstance;

/// One history entry as read from storage, before classification.
///
/// Both storage generations are reduced to this shape at the read boundary;
/// nothing past the aggregator sees their schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWorkspaceEntry {
    /// Still percent-encoded
    pub uri: String,
    pub label: Option<String>,
}

impl RawWorkspaceEntry {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

/// A storage generation that can yield history entries for an instance.
///
/// Responsibilities:
/// - Return `Ok(vec![])` when the instance simply has no such storage
/// - Return `Err` only for failures worth reporting (corrupt content)
pub trait HistorySource: Send + Sync {
    /// File this source reads for the given instance
    fn storage_path(&self, instance: &EditorInstance) -> PathBuf;

    fn read_entries(&self, instance: &EditorInstance) -> Result<Vec<RawWorkspaceEntry>>;
}
