use wsrecall_types::{WorkspaceKind, WorkspaceRecord};

/// Narrow an aggregated list for presentation
#[derive(Debug, Clone, Default)]
pub struct WorkspaceQuery {
    kind: Option<WorkspaceKind>,
    text: Option<String>,
}

impl WorkspaceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: Option<WorkspaceKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Case-insensitive substring match on the display name and path
    pub fn text(mut self, text: Option<&str>) -> Self {
        self.text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        self
    }

    pub fn matches(&self, record: &WorkspaceRecord) -> bool {
        if let Some(kind) = self.kind
            && record.kind() != kind
        {
            return false;
        }

        match &self.text {
            Some(needle) => {
                record.display_name().to_lowercase().contains(needle)
                    || record.path().to_lowercase().contains(needle)
            }
            None => true,
        }
    }

    pub fn apply(&self, records: Vec<WorkspaceRecord>) -> Vec<WorkspaceRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::build_record;
    use crate::traits::RawWorkspaceEntry;
    use std::sync::Arc;
    use wsrecall_types::EditorInstance;

    fn records() -> Vec<WorkspaceRecord> {
        let instance = Arc::new(EditorInstance::new("Code", "/tmp/code"));
        [
            "file:///home/me/Backend",
            "file:///home/me/all.code-workspace",
            "vscode-remote://ssh-remote%2Bbox/srv/backend",
        ]
        .into_iter()
        .filter_map(|uri| build_record(RawWorkspaceEntry::new(uri), &instance))
        .collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(WorkspaceQuery::new().apply(records()).len(), 3);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let found = WorkspaceQuery::new().text(Some("BACKEND")).apply(records());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_kind_and_text_combine() {
        let found = WorkspaceQuery::new()
            .kind(Some(WorkspaceKind::Remote))
            .text(Some("backend"))
            .apply(records());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].extra_info(), Some("ssh-remote+box"));
    }
}
