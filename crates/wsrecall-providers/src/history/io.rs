use super::schema::{RecentlyOpened, decode_entries};
use crate::traits::{HistorySource, RawWorkspaceEntry};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use wsrecall_state::StateDb;
use wsrecall_types::EditorInstance;

/// Read the recently-opened history from a state database.
///
/// `Ok(None)` when the database is absent, unreadable or has no history
/// row yet. Only a history value that is not valid JSON is an error.
pub fn read_state_history(db_path: &Path) -> Result<Option<Vec<RawWorkspaceEntry>>> {
    let raw = match StateDb::open_readonly(db_path).and_then(|db| db.recently_opened_paths()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(None),
        // missing, locked or foreign databases contribute nothing
        Err(err) => {
            debug!(path = %db_path.display(), error = %err, "skipping state database");
            return Ok(None);
        }
    };

    let history: RecentlyOpened = serde_json::from_str(&raw).map_err(|source| Error::Json {
        path: db_path.to_path_buf(),
        source,
    })?;

    Ok(Some(decode_entries(history.entries, true)))
}

/// `User/globalStorage/state.vscdb` (editor v1.64+)
pub struct StateDbSource;

impl HistorySource for StateDbSource {
    fn storage_path(&self, instance: &EditorInstance) -> PathBuf {
        instance.state_db_path()
    }

    fn read_entries(&self, instance: &EditorInstance) -> Result<Vec<RawWorkspaceEntry>> {
        Ok(read_state_history(&self.storage_path(instance))?.unwrap_or_default())
    }
}
