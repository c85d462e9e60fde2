use std::fmt;
use std::path::PathBuf;

/// Result type for wsrecall-state operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading the state database
#[derive(Debug)]
pub enum Error {
    /// SQLite operation failed
    Database(rusqlite::Error),

    /// Database file does not exist
    NotFound(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such table") {
                    write!(
                        f,
                        "Not an editor state database: {}. Expected an ItemTable key/value table.",
                        msg
                    )
                } else if msg.contains("database is locked") || msg.contains("database is busy") {
                    // Editors hold an exclusive lock while flushing state
                    write!(
                        f,
                        "State database is locked: {}. Close the editor or try again.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::NotFound(path) => write!(f, "State database not found: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::NotFound(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}
