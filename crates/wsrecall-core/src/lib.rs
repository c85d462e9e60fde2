//! URI classification and path helpers shared by the storage readers.
//!
//! Everything here is pure string work: no filesystem access, no logging.

mod classify;
mod error;
mod path;

pub use classify::{WORKSPACE_FILE_SUFFIX, classify, classify_raw};
pub use error::{Error, Result};
pub use path::{expand_tilde, folder_name, resolve_config_path, unescape_uri};
