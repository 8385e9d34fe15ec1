//! File discovery and predicate filtering.
//!
//! `enumerate_files` walks a directory lazily with `glob`; `discover` turns the
//! hits into root-relative Unix-style paths and keeps those accepted by at
//! least one matcher.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IndexError;
use crate::utils::paths::{normalize_separators, to_relative_unix_style};

/// Predicate deciding whether a discovered file contributes to the index
///
/// Receives the root-relative path with `/` separators. Any
/// `Fn(&str) -> bool + Send + Sync` closure is a matcher.
pub trait PathMatcher: Send + Sync {
    fn matches(&self, path: &str) -> bool;
}

impl<F> PathMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, path: &str) -> bool {
        self(path)
    }
}

/// Ready-made matchers
pub mod matchers {
    use super::PathMatcher;

    /// Accept paths ending in `.{ext}`
    pub fn extension(ext: &str) -> impl PathMatcher {
        let suffix = format!(".{}", ext);
        move |path: &str| path.ends_with(&suffix)
    }

    /// Accept everything except one exact path (typically the index itself)
    pub fn except(excluded: &str) -> impl PathMatcher {
        let excluded = excluded.replace('\\', "/");
        move |path: &str| path != excluded
    }

    /// Accept a path only when every inner matcher does
    pub fn all_of(inner: Vec<Box<dyn PathMatcher>>) -> impl PathMatcher {
        move |path: &str| inner.iter().all(|matcher| matcher.matches(path))
    }
}

/// A file that passed the matchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Native path used for reading
    pub absolute: PathBuf,
    /// Root-relative, `/` separated
    pub path: String,
}

/// Outcome of a discovery pass
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub files: Vec<DiscoveredFile>,
    /// Number of files enumerated before filtering
    pub scanned: usize,
}

/// Lazily enumerate files below `dir` whose name ends in `.{extension}`
///
/// Order is traversal order. A missing directory yields nothing.
pub fn enumerate_files(
    dir: &Path,
    extension: &str,
) -> Result<impl Iterator<Item = Result<PathBuf, IndexError>>, IndexError> {
    let dir_pattern = glob::Pattern::escape(&normalize_separators(&dir.to_string_lossy()));
    let pattern = format!(
        "{}/**/*.{}",
        dir_pattern.trim_end_matches('/'),
        glob::Pattern::escape(extension)
    );
    debug!("Enumerating files matching {}", pattern);

    let paths = glob::glob(&pattern)?;
    Ok(paths.filter_map(|entry| match entry {
        Ok(path) if path.is_file() => Some(Ok(path)),
        Ok(_) => None,
        Err(e) => Some(Err(IndexError::from(e))),
    }))
}

/// Enumerate `dir` and keep files accepted by any of `matchers`
pub fn discover(
    root: &Path,
    dir: &Path,
    extension: &str,
    matchers: &[&dyn PathMatcher],
) -> Result<Discovery, IndexError> {
    let mut discovery = Discovery::default();

    for entry in enumerate_files(dir, extension)? {
        let absolute = entry?;
        discovery.scanned += 1;

        let path = to_relative_unix_style(&absolute, root)?;
        if matchers.iter().any(|matcher| matcher.matches(&path)) {
            discovery.files.push(DiscoveredFile { absolute, path });
        }
    }

    debug!(
        "Discovered {} files, {} accepted",
        discovery.scanned,
        discovery.files.len()
    );
    Ok(discovery)
}
