use std::env;
use std::path::PathBuf;
use wsrecall_core::*;
use wsrecall_types::WorkspaceKind;

#[test]
fn test_folder_name_last_segment() {
    assert_eq!(folder_name("file:///home/me/project"), "project");
    assert_eq!(folder_name("C:\\work\\app"), "app");
    assert_eq!(
        folder_name("vscode-remote://ssh-remote+myhost/home/user/project"),
        "project"
    );
}

#[test]
fn test_folder_name_drive_root() {
    // classify first, then apply the fallback to the decoded path
    let decoded = "C:\\";
    let classified = classify(decoded).unwrap();
    assert_eq!(classified.kind(), WorkspaceKind::Folder);
    assert_eq!(folder_name(decoded), "C");

    assert_eq!(folder_name("file:///c:/"), "c");
}

#[test]
fn test_folder_name_trailing_separator() {
    assert_eq!(folder_name("/srv/app/"), "app");
    assert_eq!(folder_name("C:\\work\\app\\"), "app");
}

#[test]
fn test_folder_name_never_empty() {
    assert_eq!(folder_name("/"), "/");
    assert_eq!(folder_name("x"), "x");
}

#[test]
fn test_expand_tilde_passthrough() {
    assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
}

#[test]
fn test_resolve_config_path_priority() {
    unsafe {
        env::set_var("WSRECALL_CONFIG", "/env/wsrecall.toml");
    }

    // Explicit should override env var
    let result = resolve_config_path(Some("/explicit/config.toml")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/config.toml"));

    let result = resolve_config_path(None).unwrap();
    assert_eq!(result, PathBuf::from("/env/wsrecall.toml"));

    unsafe {
        env::remove_var("WSRECALL_CONFIG");
    }
}
