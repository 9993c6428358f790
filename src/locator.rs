use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::TodoError;

/// The metadata directory that marks a repository root. Presence is the sole
/// test; history, branches, and objects are never inspected.
const GIT_DIR: &str = ".git";

/// Check whether `dir` is itself a repository root.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(GIT_DIR).is_dir()
}

/// Walk `start` recursively and return the root of every git repository
/// found, i.e. every directory that directly contains a `.git` directory.
///
/// `start` is canonicalized first, so results are absolute regardless of how
/// the caller spelled the path. Nested repositories are reported separately;
/// the contents of `.git` directories are never descended into. Ordering is
/// whatever the traversal yields.
///
/// With `best_effort` set (the CLI always sets it), unreadable subtrees are
/// skipped and the walk continues; otherwise the first traversal error is
/// returned.
pub fn find_repositories(start: &Path, best_effort: bool) -> Result<Vec<PathBuf>, TodoError> {
    let root = start.canonicalize()?;
    let mut repos = Vec::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == GIT_DIR));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) if best_effort => continue,
            Err(e) => return Err(e.into()),
        };

        if entry.file_type().is_dir() && is_repository(entry.path()) {
            repos.push(entry.path().to_path_buf());
        }
    }

    Ok(repos)
}
