use crate::path::unescape_uri;
use regex::Regex;
use std::sync::LazyLock;
use wsrecall_types::{ClassifiedUri, WorkspaceKind};

/// Suffix of multi-root workspace files
pub const WORKSPACE_FILE_SUFFIX: &str = ".code-workspace";

static FILE_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:file)://(?P<rest>.+)$").unwrap());

// authority is `<remote-name>+<host>`, path must start with '/'
static REMOTE_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:vscode-remote)://(?P<authority>[^/+]+\+[^/]+)(?P<path>/.*)$").unwrap()
});

static DRIVE_PREFIXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[A-Za-z]:(?:[/\\]|$)").unwrap());

// Bare paths written by older editor generations
static WINDOWS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]:(?:[/\\]|$)|\\\\[^\\]+)").unwrap());

/// Classify an already percent-decoded history entry.
///
/// Returns `None` when the string is not a workspace URI this crate understands.
/// Such entries are meant to be skipped, not reported.
pub fn classify(decoded: &str) -> Option<ClassifiedUri> {
    if let Some(caps) = REMOTE_URI.captures(decoded) {
        return Some(ClassifiedUri::remote(&caps["authority"], &caps["path"]));
    }

    if let Some(caps) = FILE_URI.captures(decoded) {
        let rest = &caps["rest"];
        let path = if DRIVE_PREFIXED.is_match(rest) {
            // file:///C:/x -> C:/x
            rest[1..].to_string()
        } else if rest.starts_with('/') {
            rest.to_string()
        } else {
            // file://server/share -> UNC
            format!("//{}", rest)
        };
        return Some(local(path));
    }

    if decoded.starts_with('/') || WINDOWS_PATH.is_match(decoded) {
        return Some(local(decoded.to_string()));
    }

    None
}

/// Decode then classify; returns the decoded string alongside the result
pub fn classify_raw(raw: &str) -> Option<(String, ClassifiedUri)> {
    let decoded = unescape_uri(raw);
    let classified = classify(&decoded)?;
    Some((decoded, classified))
}

fn local(path: String) -> ClassifiedUri {
    let kind = if is_workspace_file(&path) {
        WorkspaceKind::WorkspaceFile
    } else {
        WorkspaceKind::Folder
    };
    ClassifiedUri::local(kind, path)
}

fn is_workspace_file(path: &str) -> bool {
    let Some(split) = path.len().checked_sub(WORKSPACE_FILE_SUFFIX.len()) else {
        return false;
    };
    let (Some(stem), Some(tail)) = (path.get(..split), path.get(split..)) else {
        return false;
    };
    tail.eq_ignore_ascii_case(WORKSPACE_FILE_SUFFIX)
        && !stem.is_empty()
        && !stem.ends_with(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsrecall_types::RemoteKind;

    #[test]
    fn test_local_windows_folder() {
        let c = classify("file:///c:/Users/me/project").unwrap();
        assert_eq!(c.kind(), WorkspaceKind::Folder);
        assert_eq!(c.relative_path(), "c:/Users/me/project");
        assert!(c.remote_authority().is_none());
    }

    #[test]
    fn test_local_posix_folder_keeps_leading_slash() {
        let c = classify("file:///home/me/project").unwrap();
        assert_eq!(c.kind(), WorkspaceKind::Folder);
        assert_eq!(c.relative_path(), "/home/me/project");
    }

    #[test]
    fn test_unc_file_uri() {
        let c = classify("file://server/share/project").unwrap();
        assert_eq!(c.relative_path(), "//server/share/project");
    }

    #[test]
    fn test_workspace_file_suffix() {
        let c = classify("file:///c:/work/project.code-workspace").unwrap();
        assert_eq!(c.kind(), WorkspaceKind::WorkspaceFile);

        let upper = classify("C:\\work\\Project.CODE-WORKSPACE").unwrap();
        assert_eq!(upper.kind(), WorkspaceKind::WorkspaceFile);

        // the bare suffix is a dotfile folder, not a workspace file
        let bare = classify("/.code-workspace").unwrap();
        assert_eq!(bare.kind(), WorkspaceKind::Folder);
    }

    #[test]
    fn test_remote_ssh() {
        let c = classify("vscode-remote://ssh-remote+myhost/home/user/project").unwrap();
        assert_eq!(c.kind(), WorkspaceKind::Remote);
        assert_eq!(c.remote_authority(), Some("ssh-remote+myhost"));
        assert_eq!(c.relative_path(), "/home/user/project");
        assert_eq!(c.remote_kind(), Some(RemoteKind::SshRemote));
    }

    #[test]
    fn test_remote_workspace_file_stays_remote() {
        let c = classify("vscode-remote://wsl+Ubuntu/home/me/all.code-workspace").unwrap();
        assert_eq!(c.kind(), WorkspaceKind::Remote);
        assert_eq!(c.remote_authority(), Some("wsl+Ubuntu"));
    }

    #[test]
    fn test_remote_without_path_or_plus_is_rejected() {
        assert!(classify("vscode-remote://ssh-remote+myhost").is_none());
        assert!(classify("vscode-remote://myhost/home").is_none());
    }

    #[test]
    fn test_bare_paths() {
        let drive = classify("C:\\").unwrap();
        assert_eq!(drive.kind(), WorkspaceKind::Folder);
        assert_eq!(drive.relative_path(), "C:\\");

        assert!(classify("/srv/app").is_some());
        assert!(classify("\\\\server\\share").is_some());
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert!(classify("plain garbage text").is_none());
        assert!(classify("").is_none());
        assert!(classify("vscode-vfs://github/owner/repo").is_none());
        assert!(classify("file://").is_none());
    }

    #[test]
    fn test_classify_is_deterministic() {
        let inputs = [
            "file:///c:/a",
            "vscode-remote://dev-container+abc/workspaces/x",
            "garbage",
            "C:\\",
        ];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn test_classify_raw_decodes_first() {
        let (decoded, c) = classify_raw("file:///c%3A/Users/me/my%20project").unwrap();
        assert_eq!(decoded, "file:///c:/Users/me/my project");
        assert_eq!(c.relative_path(), "c:/Users/me/my project");
    }
}
