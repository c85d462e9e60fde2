pub mod instance;
pub mod workspace;

pub use instance::EditorInstance;
pub use workspace::*;
