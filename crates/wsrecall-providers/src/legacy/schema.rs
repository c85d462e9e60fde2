use serde::Deserialize;
use serde_json::Value;

/// storage.json root; every other key in the file is ignored
#[derive(Debug, Deserialize, Default)]
pub(crate) struct StorageFile {
    #[serde(rename = "openedPathsList", default)]
    pub opened_paths_list: Option<OpenedPathsList>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct OpenedPathsList {
    /// Oldest supported generation
    #[serde(default)]
    pub workspaces3: Option<Vec<LegacyWorkspaceRef>>,
    /// v1.55+ shape, same element layout as the database history
    #[serde(default)]
    pub entries: Option<Vec<Value>>,
}

/// A `workspaces3` element: a folder URI string, or a multi-root workspace
/// object carrying `configURIPath`. Any other shape is skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum LegacyWorkspaceRef {
    Uri(String),
    Workspace {
        #[serde(rename = "configURIPath")]
        config_uri_path: String,
    },
    Other(Value),
}

impl LegacyWorkspaceRef {
    pub fn into_uri(self) -> Option<String> {
        match self {
            LegacyWorkspaceRef::Uri(uri) => Some(uri),
            LegacyWorkspaceRef::Workspace { config_uri_path } => Some(config_uri_path),
            LegacyWorkspaceRef::Other(_) => None,
        }
    }
}
