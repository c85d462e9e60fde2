mod kind;
mod record;
mod uri;

pub use kind::{RemoteKind, WorkspaceKind};
pub use record::{WorkspaceRecord, WorkspaceRecordBuilder};
pub use uri::ClassifiedUri;
