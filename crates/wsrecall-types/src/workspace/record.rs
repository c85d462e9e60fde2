use super::kind::{RemoteKind, WorkspaceKind};
use super::uri::ClassifiedUri;
use crate::instance::EditorInstance;
use serde::Serialize;
use std::sync::Arc;

/// A recently opened workspace, normalized across storage generations.
///
/// Records are immutable: every field, including the optional label, is
/// collected by [`WorkspaceRecordBuilder`] before the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceRecord {
    path: String,
    relative_path: String,
    folder_name: String,
    extra_info: Option<String>,
    kind: WorkspaceKind,
    source_instance: Arc<EditorInstance>,
    label: Option<String>,
}

impl WorkspaceRecord {
    pub fn builder(
        path: impl Into<String>,
        classified: ClassifiedUri,
        source_instance: Arc<EditorInstance>,
    ) -> WorkspaceRecordBuilder {
        WorkspaceRecordBuilder {
            path: path.into(),
            classified,
            source_instance,
            folder_name: None,
            label: None,
        }
    }

    /// Unescaped URI as stored by the editor; identity for dedup and "open"
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Remote authority for remote records
    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref()
    }

    pub fn kind(&self) -> WorkspaceKind {
        self.kind
    }

    pub fn source_instance(&self) -> &EditorInstance {
        &self.source_instance
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn remote_kind(&self) -> Option<RemoteKind> {
        self.extra_info.as_deref().map(RemoteKind::from_authority)
    }

    /// Title for result lists: the stored label wins over the folder name
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.folder_name)
    }

    /// Secondary line for result lists
    pub fn subtitle(&self) -> String {
        match self.remote_kind() {
            Some(remote) => format!("{}: {}", remote.display_name(), self.relative_path),
            None => self.relative_path.clone(),
        }
    }
}

pub struct WorkspaceRecordBuilder {
    path: String,
    classified: ClassifiedUri,
    source_instance: Arc<EditorInstance>,
    folder_name: Option<String>,
    label: Option<String>,
}

impl WorkspaceRecordBuilder {
    pub fn folder_name(mut self, folder_name: impl Into<String>) -> Self {
        self.folder_name = Some(folder_name.into());
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Returns `None` for an empty path. A missing or empty folder name
    /// falls back to the path itself.
    pub fn build(self) -> Option<WorkspaceRecord> {
        if self.path.is_empty() {
            return None;
        }

        let folder_name = self
            .folder_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.path.clone());

        Some(WorkspaceRecord {
            relative_path: self.classified.relative_path().to_string(),
            extra_info: self.classified.remote_authority().map(str::to_string),
            kind: self.classified.kind(),
            path: self.path,
            folder_name,
            source_instance: self.source_instance,
            label: self.label,
        })
    }
}
