use super::kind::{RemoteKind, WorkspaceKind};
use serde::Serialize;

/// Result of classifying one decoded history URI.
///
/// `remote_authority` is present exactly when `kind` is [`WorkspaceKind::Remote`];
/// the constructors are the only way to build one, so the pairing cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedUri {
    kind: WorkspaceKind,
    relative_path: String,
    remote_authority: Option<String>,
}

impl ClassifiedUri {
    /// Local folder or local workspace file.
    /// [`WorkspaceKind::Remote`] is mapped to `Folder`: a local URI has no authority.
    pub fn local(kind: WorkspaceKind, relative_path: impl Into<String>) -> Self {
        let kind = match kind {
            WorkspaceKind::Remote => WorkspaceKind::Folder,
            other => other,
        };
        Self {
            kind,
            relative_path: relative_path.into(),
            remote_authority: None,
        }
    }

    pub fn remote(authority: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            kind: WorkspaceKind::Remote,
            relative_path: relative_path.into(),
            remote_authority: Some(authority.into()),
        }
    }

    pub fn kind(&self) -> WorkspaceKind {
        self.kind
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn remote_authority(&self) -> Option<&str> {
        self.remote_authority.as_deref()
    }

    pub fn remote_kind(&self) -> Option<RemoteKind> {
        self.remote_authority
            .as_deref()
            .map(RemoteKind::from_authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_only_on_remote() {
        let local = ClassifiedUri::local(WorkspaceKind::Remote, "/tmp/x");
        assert_eq!(local.kind(), WorkspaceKind::Folder);
        assert!(local.remote_authority().is_none());

        let remote = ClassifiedUri::remote("wsl+Ubuntu", "/home/me");
        assert_eq!(remote.kind(), WorkspaceKind::Remote);
        assert_eq!(remote.remote_authority(), Some("wsl+Ubuntu"));
        assert_eq!(remote.remote_kind(), Some(RemoteKind::Wsl));
    }
}
