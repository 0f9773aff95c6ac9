//! Selecting which directories of a repository the extractor scans.
//!
//! All matching here is plain string-prefix matching on the path as written:
//! an exclude prefix of `/repo/exclu` also drops `/repo/excluded`. Use a
//! trailing separator in the prefix to stop at a directory boundary.

use crate::fs_util;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories to scan, as computed by [`filter`].
///
/// When no exclusions applied, `dirs` are the candidate roots and each one is
/// meant to be scanned recursively. When exclusions applied, `dirs` is the
/// full expansion of every kept subdirectory and each one is scanned on its
/// own, without descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    dirs: Vec<PathBuf>,
    expanded: bool,
}

impl PathSet {
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn into_dirs(self) -> Vec<PathBuf> {
        self.dirs
    }
}

/// Computes the directories to scan under `candidates`.
///
/// With no exclude prefixes the candidates come back untouched and nothing is
/// read from disk. Otherwise each candidate is expanded into all of its nested
/// directories and any directory starting with an exclude prefix is dropped.
/// The candidate itself is not part of the expansion, so files sitting
/// directly in a candidate root are not scanned once exclusions are active.
pub fn filter(candidates: &[PathBuf], exclude_prefixes: &[String]) -> io::Result<PathSet> {
    if exclude_prefixes.is_empty() {
        return Ok(PathSet {
            dirs: candidates.to_vec(),
            expanded: false,
        });
    }

    let prune = |dir: &Path| is_excluded(dir, exclude_prefixes);
    let mut dirs = Vec::new();
    for candidate in candidates {
        let nested = fs_util::subdirectories(candidate, &prune)?;
        debug!(
            candidate = %candidate.display(),
            kept = nested.len(),
            "Expanded input path"
        );
        dirs.extend(nested);
    }

    Ok(PathSet {
        dirs,
        expanded: true,
    })
}

/// True when `path` starts with any of `exclude_prefixes` (string comparison).
///
/// A prefix ending in a separator names a directory: it matches that
/// directory itself as well as everything below it.
pub fn is_excluded(path: &Path, exclude_prefixes: &[String]) -> bool {
    let path = path.to_string_lossy();
    exclude_prefixes.iter().any(|prefix| {
        path.starts_with(prefix.as_str())
            || prefix
                .strip_suffix(std::path::is_separator)
                .is_some_and(|dir| path == dir)
    })
}

/// Configured input paths that belong to `repo_root`, in configured order.
pub fn select_by_root_prefix(all_paths: &[PathBuf], repo_root: &Path) -> Vec<PathBuf> {
    let root = repo_root.to_string_lossy();
    all_paths
        .iter()
        .filter(|p| p.to_string_lossy().starts_with(root.as_ref()))
        .cloned()
        .collect()
}
