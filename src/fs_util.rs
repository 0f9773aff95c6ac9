//! Recursive file enumeration and copying.
//!
//! Every listing is sorted so callers get the same order on every platform.
//! Symbolic links are never followed, so a link pointing back up the tree
//! cannot make a walk revisit it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// All files named exactly `name` under `root`, at any depth.
pub fn files_by_name(root: &Path, name: &str) -> io::Result<Vec<PathBuf>> {
    collect_files(walker(root), |path| path.file_name().is_some_and(|n| n == name))
}

/// All files with `extension` (without the dot) under `root`, at any depth.
pub fn files_by_extension(root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    collect_files(walker(root), |path| has_extension(path, extension))
}

/// Files with `extension` directly inside `dir`; subdirectories are not entered.
pub fn files_in_dir_by_extension(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    collect_files(walker(dir).max_depth(1), |path| has_extension(path, extension))
}

/// Every directory nested under `root` (not `root` itself), depth first in
/// sorted order. Directories for which `prune` returns true are left out
/// together with everything below them.
pub fn subdirectories<F>(root: &Path, prune: &F) -> io::Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut results = Vec::new();
    let entries = walker(root).min_depth(1).into_iter().filter_entry(|entry| {
        if entry.file_type().is_dir() && prune(entry.path()) {
            debug!(path = %entry.path().display(), "Pruning directory");
            return false;
        }
        true
    });
    for entry in entries {
        let entry = entry?;
        if entry.file_type().is_dir() {
            results.push(entry.into_path());
        }
    }
    Ok(results)
}

/// Copies the tree under `source` into `target`, creating directories as
/// needed and overwriting existing files. Files whose name is listed in
/// `exclusions` are skipped at every level. Returns the number of files copied.
pub fn copy_with_exclusion(source: &Path, target: &Path, exclusions: &[&str]) -> io::Result<usize> {
    fs::create_dir_all(target)?;
    let mut copied = 0;
    for entry in walker(source).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let to = target.join(relative);
        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&to)?;
        } else if !file_type.is_file() {
            debug!(path = %entry.path().display(), "Skipping symbolic link");
        } else if exclusions.iter().any(|ex| entry.file_name() == *ex) {
            debug!(path = %entry.path().display(), "Skipping excluded file");
        } else {
            fs::copy(entry.path(), &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|e| e == extension)
}

fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root).follow_links(false).sort_by_file_name()
}

fn collect_files<F>(walker: WalkDir, matches: F) -> io::Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut results = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && matches(entry.path()) {
            results.push(entry.into_path());
        }
    }
    results.sort();
    Ok(results)
}
