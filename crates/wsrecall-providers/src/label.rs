use regex::Regex;
use std::sync::LazyLock;

// `<name>[<qualifier>]`: name is everything before the first '['
static LABEL_PARSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>[^\[]+)(?P<qualifier>\[.+\])$").unwrap());

/// Rewrite a stored history label as `"<qualifier> <name>"`.
///
/// `"MyProj [WSL: Ubuntu]"` becomes `"[WSL: Ubuntu] MyProj"`. Labels that
/// are not of that two-part shape yield `None`; the record then falls back
/// to its folder name.
pub fn transform_label(label: &str) -> Option<String> {
    let caps = LABEL_PARSER.captures(label.trim())?;
    let name = caps["name"].trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("{} {}", &caps["qualifier"], name))
}
