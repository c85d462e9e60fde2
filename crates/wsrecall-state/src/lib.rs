// Read-only view of state.vscdb
// One scoped connection per open, never written to

mod db;
mod error;
mod schema;

// Public API
pub use db::StateDb;
pub use error::{Error, Result};
pub use schema::{ITEM_TABLE, RECENTLY_OPENED_PATHS_KEY};
