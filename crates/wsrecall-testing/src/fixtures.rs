//! On-disk editor app-data directories for tests.
//!
//! Provides utilities to:
//! - Write legacy `storage.json` files (raw text or generated history)
//! - Create `User/globalStorage/state.vscdb` with a history row
//! - Hand out the matching `EditorInstance`

use anyhow::Result;
use rusqlite::Connection;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use wsrecall_types::EditorInstance;

/// Key the editor stores its recently-opened list under
pub const HISTORY_KEY: &str = "history.recentlyOpenedPathsList";

/// One editor's app-data directory rooted at `root`.
pub struct AppDataFixture {
    name: String,
    root: PathBuf,
}

impl AppDataFixture {
    /// Create the directory (and parents) for an editor named `name`.
    pub fn create(parent: &Path, name: &str) -> Result<Self> {
        let root = parent.join(name);
        fs::create_dir_all(&root)?;
        Ok(Self {
            name: name.to_string(),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn instance(&self) -> EditorInstance {
        EditorInstance::new(self.name.clone(), self.root.clone())
    }

    pub fn storage_json_path(&self) -> PathBuf {
        self.root.join("storage.json")
    }

    pub fn state_db_path(&self) -> PathBuf {
        self.root.join("User").join("globalStorage").join("state.vscdb")
    }

    /// Write `storage.json` verbatim (useful for malformed content).
    pub fn write_storage_json(&self, content: &str) -> Result<&Self> {
        fs::write(self.storage_json_path(), content)?;
        Ok(self)
    }

    /// Write a `storage.json` with the given `workspaces3` and `entries` URIs.
    pub fn write_legacy_history(
        &self,
        workspaces3: &[&str],
        folder_uris: &[&str],
    ) -> Result<&Self> {
        let entries: Vec<Value> = folder_uris
            .iter()
            .map(|uri| json!({ "folderUri": uri }))
            .collect();
        let doc = json!({
            "openedPathsList": {
                "workspaces3": workspaces3,
                "entries": entries,
            }
        });
        self.write_storage_json(&serde_json::to_string_pretty(&doc)?)
    }

    /// Create `state.vscdb` with an empty ItemTable.
    pub fn create_state_db(&self) -> Result<Connection> {
        let db_path = self.state_db_path();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB);",
        )?;
        Ok(conn)
    }

    /// Store `value` verbatim under the history key.
    pub fn write_state_history_raw(&self, value: &str) -> Result<&Self> {
        let conn = self.create_state_db()?;
        conn.execute(
            "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
            [HISTORY_KEY, value],
        )?;
        Ok(self)
    }

    /// Store a history built from `(folderUri, label)` pairs.
    pub fn write_state_history(&self, entries: &[(&str, Option<&str>)]) -> Result<&Self> {
        let entries: Vec<Value> = entries
            .iter()
            .map(|(uri, label)| match label {
                Some(label) => json!({ "folderUri": uri, "label": label }),
                None => json!({ "folderUri": uri }),
            })
            .collect();
        let doc = json!({ "entries": entries });
        self.write_state_history_raw(&doc.to_string())
    }
}
