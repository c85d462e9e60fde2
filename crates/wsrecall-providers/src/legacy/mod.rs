pub mod io;
pub(crate) mod schema;

pub use self::io::{LegacyStorageSource, read_storage_json};
