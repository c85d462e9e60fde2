use super::schema::StorageFile;
use crate::history::schema::decode_entries;
use crate::traits::{HistorySource, RawWorkspaceEntry};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use wsrecall_types::EditorInstance;

/// Read the opened-paths history from a legacy `storage.json`.
///
/// `Ok(None)` when the file does not exist. `workspaces3` entries come
/// before `entries` entries; legacy entries never carry a label.
pub fn read_storage_json(path: &Path) -> Result<Option<Vec<RawWorkspaceEntry>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let storage: StorageFile = serde_json::from_str(content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(opened) = storage.opened_paths_list else {
        return Ok(Some(Vec::new()));
    };

    let mut entries: Vec<RawWorkspaceEntry> = opened
        .workspaces3
        .unwrap_or_default()
        .into_iter()
        .filter_map(|workspace| workspace.into_uri())
        .map(RawWorkspaceEntry::new)
        .collect();

    entries.extend(decode_entries(opened.entries.unwrap_or_default(), false));

    Ok(Some(entries))
}

/// `<appData>/storage.json` (editors before v1.64)
pub struct LegacyStorageSource;

impl HistorySource for LegacyStorageSource {
    fn storage_path(&self, instance: &EditorInstance) -> PathBuf {
        instance.storage_json_path()
    }

    fn read_entries(&self, instance: &EditorInstance) -> Result<Vec<RawWorkspaceEntry>> {
        Ok(read_storage_json(&self.storage_path(instance))?.unwrap_or_default())
    }
}
