use crate::traits::RawWorkspaceEntry;
use serde::Deserialize;
use serde_json::Value;

/// Value of `history.recentlyOpenedPathsList`
#[derive(Debug, Deserialize, Default)]
pub(crate) struct RecentlyOpened {
    #[serde(default)]
    pub entries: Vec<Value>,
}

/// One element of an `entries` array (shared by both storage generations)
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryEntry {
    #[serde(rename = "folderUri", default)]
    pub folder_uri: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Decode `entries` elements one at a time so a single odd element
/// does not discard its neighbours. Elements without `folderUri`
/// (`fileUri`, `workspace.configPath`) are skipped.
pub(crate) fn decode_entries(values: Vec<Value>, keep_labels: bool) -> Vec<RawWorkspaceEntry> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<HistoryEntry>(value).ok())
        .filter_map(|entry| {
            let uri = entry.folder_uri?;
            let label = if keep_labels { entry.label } else { None };
            Some(RawWorkspaceEntry::new(uri).with_label(label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_entries_requires_folder_uri() {
        let values = vec![
            json!({"folderUri": "file:///a", "label": "A [x]"}),
            json!({"fileUri": "file:///notes.md"}),
            json!({"workspace": {"id": "1f2e", "configPath": "file:///w.code-workspace"}}),
            json!("not an object"),
        ];

        let entries = decode_entries(values, true);

        assert_eq!(
            entries,
            vec![RawWorkspaceEntry::new("file:///a").with_label(Some("A [x]".to_string()))]
        );
    }

    #[test]
    fn test_decode_entries_drops_labels_when_asked() {
        let values = vec![json!({"folderUri": "file:///a", "label": "A [x]"})];
        let entries = decode_entries(values, false);
        assert_eq!(entries[0].label, None);
    }
}
