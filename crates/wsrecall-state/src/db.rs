use crate::schema::{ITEM_TABLE, RECENTLY_OPENED_PATHS_KEY};
use crate::{Error, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

// NOTE: the editor owns this file. Connections are opened read-only and
// dropped as soon as the caller is done; nothing here ever writes.

pub struct StateDb {
    conn: Connection,
}

impl StateDb {
    pub fn open_readonly(db_path: &Path) -> Result<Self> {
        if !db_path.is_file() {
            return Err(Error::NotFound(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self { conn })
    }

    /// Look up a single ItemTable value.
    ///
    /// Editors store values as TEXT or BLOB depending on version; both are
    /// returned as UTF-8 (lossy). A missing key or NULL value is `None`.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let sql = format!("SELECT value FROM {} WHERE key = ?1", ITEM_TABLE);

        let value = self
            .conn
            .query_row(&sql, [key], |row| {
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                        Some(String::from_utf8_lossy(bytes).into_owned())
                    }
                    ValueRef::Integer(i) => Some(i.to_string()),
                    ValueRef::Real(r) => Some(r.to_string()),
                    ValueRef::Null => None,
                })
            })
            .optional()?;

        Ok(value.flatten())
    }

    /// Raw JSON of the recently-opened history, if the editor wrote one
    pub fn recently_opened_paths(&self) -> Result<Option<String>> {
        self.get_item(RECENTLY_OPENED_PATHS_KEY)
    }
}
