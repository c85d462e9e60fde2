use serde::{Deserialize, Serialize};
use std::fmt;

/// What a stored history entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceKind {
    /// Local folder
    Folder,
    /// Multi-root `.code-workspace` file
    WorkspaceFile,
    /// Folder behind a remote authority (SSH, WSL, container, ...)
    Remote,
}

impl WorkspaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceKind::Folder => "folder",
            WorkspaceKind::WorkspaceFile => "workspace_file",
            WorkspaceKind::Remote => "remote",
        }
    }
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Remote flavour, taken from the authority prefix before the first `+`
/// (`ssh-remote+myhost` -> `SshRemote`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteKind {
    Wsl,
    SshRemote,
    Codespaces,
    DevContainer,
    AttachedContainer,
    Tunnel,
    Other(String),
}

impl RemoteKind {
    /// Parse the remote name part of an authority (`wsl`, `ssh-remote`, ...)
    pub fn from_remote_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "wsl" => RemoteKind::Wsl,
            "ssh-remote" => RemoteKind::SshRemote,
            "vsonline" | "codespaces" => RemoteKind::Codespaces,
            "dev-container" => RemoteKind::DevContainer,
            "attached-container" => RemoteKind::AttachedContainer,
            "tunnel" => RemoteKind::Tunnel,
            _ => RemoteKind::Other(name.to_string()),
        }
    }

    /// Derive the remote flavour from a full authority (`wsl+Ubuntu`)
    pub fn from_authority(authority: &str) -> Self {
        let name = authority
            .split_once('+')
            .map(|(name, _)| name)
            .unwrap_or(authority);
        Self::from_remote_name(name)
    }

    /// Short label shown next to remote entries
    pub fn display_name(&self) -> &str {
        match self {
            RemoteKind::Wsl => "WSL",
            RemoteKind::SshRemote => "SSH",
            RemoteKind::Codespaces => "Codespaces",
            RemoteKind::DevContainer => "Dev Container",
            RemoteKind::AttachedContainer => "Attached Container",
            RemoteKind::Tunnel => "Tunnel",
            RemoteKind::Other(name) => name,
        }
    }
}

impl fmt::Display for RemoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_kind_from_authority() {
        assert_eq!(
            RemoteKind::from_authority("ssh-remote+myhost"),
            RemoteKind::SshRemote
        );
        assert_eq!(RemoteKind::from_authority("wsl+Ubuntu"), RemoteKind::Wsl);
        assert_eq!(
            RemoteKind::from_authority("vsonline+abc"),
            RemoteKind::Codespaces
        );
        assert_eq!(
            RemoteKind::from_authority("k8s-container+pod"),
            RemoteKind::Other("k8s-container".to_string())
        );
    }

    #[test]
    fn test_workspace_kind_serializes_snake_case() {
        let json = serde_json::to_string(&WorkspaceKind::WorkspaceFile).unwrap();
        assert_eq!(json, "\"workspace_file\"");
    }
}
