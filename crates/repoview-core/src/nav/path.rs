//! Slash-separated repository paths.
//!
//! Paths are plain strings without leading or trailing slashes; the empty
//! string is the repository root.

/// Normalises user- or API-supplied input into a repository path.
///
/// Leading, trailing and repeated slashes are removed.
pub fn normalize(raw: &str) -> String {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns the parent of `path`. The parent of the root is the root.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Returns the last segment of `path`, or `None` at the root.
pub fn file_name(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    path.rsplit('/').next()
}

/// Joins a child name onto a directory path.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Returns `true` if `prefix` equals `path` or is one of its ancestors.
///
/// The root is a prefix of every path.
pub fn is_prefix(prefix: &str, path: &str) -> bool {
    prefix.is_empty()
        || path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Returns `true` if `child` sits directly inside `dir`.
pub fn is_direct_child(dir: &str, child: &str) -> bool {
    !child.is_empty() && child != dir && is_prefix(dir, child) && parent(child) == dir
}

/// Returns every ancestor of `path` from the root down to `path` itself.
///
/// `ancestors("a/b")` is `["", "a", "a/b"]`; `ancestors("")` is `[""]`.
pub fn ancestors(path: &str) -> Vec<String> {
    let mut out = vec![String::new()];
    if path.is_empty() {
        return out;
    }
    let mut end = 0;
    for segment in path.split('/') {
        end += segment.len();
        out.push(path[..end].to_string());
        end += 1;
    }
    out
}
