pub mod io;
pub(crate) mod schema;

pub use self::io::{StateDbSource, read_state_history};
