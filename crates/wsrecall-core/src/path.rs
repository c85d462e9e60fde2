use crate::{Error, Result};
use std::path::PathBuf;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Percent-decode a stored history URI.
///
/// Sequences that do not decode to valid UTF-8 are replaced lossily so that
/// a single odd byte never hides an otherwise usable entry.
pub fn unescape_uri(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            let bytes = urlencoding::decode_binary(raw.as_bytes());
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }
}

/// Display name for a workspace path: the last path segment.
///
/// Drive roots such as `C:\` or `file:///C:/` have an empty last segment;
/// for those the trailing separators are dropped and the remaining segment
/// is used with its trailing `:` removed (`C:\` -> `C`). Never empty for a
/// non-empty input.
pub fn folder_name(path: &str) -> String {
    let last = path.rsplit(SEPARATORS).next().unwrap_or_default();
    if !last.is_empty() {
        return last.to_string();
    }

    let trimmed = path.trim_end_matches(SEPARATORS);
    let name = trimmed
        .rsplit(SEPARATORS)
        .next()
        .unwrap_or_default()
        .trim_end_matches(':');

    if name.is_empty() {
        path.to_string()
    } else {
        name.to_string()
    }
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. WSRECALL_CONFIG environment variable (with tilde expansion)
/// 3. System config directory
/// 4. ~/.wsrecall/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("WSRECALL_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("wsrecall").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".wsrecall").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or system config directory found"
            .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_uri() {
        assert_eq!(
            unescape_uri("file:///c%3A/My%20Projects/app"),
            "file:///c:/My Projects/app"
        );
        assert_eq!(unescape_uri("no-escapes"), "no-escapes");
    }

    #[test]
    fn test_unescape_uri_invalid_utf8_is_lossy() {
        let decoded = unescape_uri("file:///tmp/%FF");
        assert!(decoded.starts_with("file:///tmp/"));
        assert!(decoded.ends_with('\u{FFFD}'));
    }
}
