//! Request path to filesystem path resolution
//!
//! Maps a raw request path to a file under the document root, rejecting
//! traversal attempts. No filesystem access happens here; existence is
//! checked later when the file is opened.

/// File name served for requests that target a directory.
pub const INDEX_FILE: &str = "index.html";

/// Rejection signal for paths carrying a traversal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsafePath;

/// A request path resolved against the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path to open, root prefix included
    pub path: String,

    /// Extension of the final path component, without the dot; empty if none
    pub extension: String,
}

/// Resolves a raw request path against a separator-terminated document root.
///
/// Any path containing the two-character sequence `..` is rejected outright.
/// The check is deliberately coarse: it also rejects legitimate file names
/// containing `..`, and it does not canonicalize the result. Paths ending in
/// `/` resolve to the directory's [`INDEX_FILE`].
pub fn resolve(root: &str, raw_path: &str) -> Result<ResolvedFile, UnsafePath> {
    if raw_path.contains("..") {
        return Err(UnsafePath);
    }

    let mut path = format!("{}{}", root, raw_path);
    if path.ends_with('/') {
        path.push_str(INDEX_FILE);
    }

    let extension = extension_of(&path).to_string();

    Ok(ResolvedFile { path, extension })
}

/// Extension of the last path component, or "" when it carries no dot.
fn extension_of(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);

    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => "",
    }
}
