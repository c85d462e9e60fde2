// Error types
pub mod error;

// Source trait and the shared raw entry shape
pub mod traits;

// Storage generations
pub mod history;
pub mod legacy;

// Label post-processing
pub mod label;

// Logging capability injected by the host
pub mod logging;

// Aggregation across instances
pub mod aggregator;
pub mod query;

// Known editor variants
pub mod registry;

// Traits
pub use traits::{HistorySource, RawWorkspaceEntry};

// Sources
pub use history::StateDbSource;
pub use legacy::LegacyStorageSource;

// Aggregator
pub use aggregator::{WorkspaceAggregator, build_record, dedup_workspaces, list_workspaces};
pub use query::WorkspaceQuery;

// Label
pub use label::transform_label;

// Logging
pub use logging::{Logger, NullLogger, TracingLogger};

// Registry
pub use registry::{EditorVariant, detect_instances, detect_instances_in};

// Error types
pub use error::{Error, Result};
