//! Document-root path resolution.
//!
//! Request paths are resolved against the server's working directory by
//! literal concatenation. The traversal guard rejects any path containing
//! the substring `..`; it does not attempt to catch percent-encoded
//! traversal, absolute paths, or symlinks that point outside the root.

use std::path::{Path, PathBuf};

/// Base directory all request paths are resolved against.
const DOC_ROOT: &str = ".";

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The path contains a `..` segment or any other `..` occurrence.
    Traversal,
}

/// A request path anchored under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Map a URL path onto the filesystem.
///
/// The leading `/` of the URL becomes the separator between the document
/// root and the relative path. No normalization or percent-decoding is
/// applied; the path is used verbatim.
pub fn resolve(path: &str) -> Result<ResolvedPath, ResolveError> {
    if path.contains("..") {
        return Err(ResolveError::Traversal);
    }

    Ok(ResolvedPath(PathBuf::from(format!("{DOC_ROOT}{path}"))))
}
