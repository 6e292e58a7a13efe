//! Directory walking
//!
//! Each root is traversed on its own thread. Excluded directories are pruned
//! before descent, and traversal errors are logged without stopping the walk.
//! Candidate manifest paths are pushed into a bounded channel so a slow
//! consumer throttles the traversal.

use crate::core::filter::PathFilter;
use crate::error::{handle_error, ScanError};
use crossbeam::channel::{self, Sender};
use std::path::PathBuf;
use std::thread;
use walkdir::{DirEntry, WalkDir};

/// Concurrent multi-root manifest finder
#[derive(Debug, Clone)]
pub struct Walker {
    roots: Vec<PathBuf>,
    filter: PathFilter,
    follow_links: bool,
}

impl Walker {
    /// Create a walker over `roots` using the given filter
    pub fn new(roots: Vec<PathBuf>, filter: PathFilter) -> Self {
        Self {
            roots,
            filter,
            follow_links: false,
        }
    }

    /// Follow symbolic links during traversal
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walk every root concurrently, sending matching file paths to `tx`.
    ///
    /// Returns once all roots are exhausted. The channel closes when `tx` and
    /// every per-root clone of it have been dropped, which happens before
    /// this function returns.
    pub fn walk_into(&self, tx: Sender<PathBuf>) {
        thread::scope(|scope| {
            for root in &self.roots {
                let tx = tx.clone();
                scope.spawn(move || self.walk_root(root.clone(), tx));
            }
        });
        drop(tx);
    }

    /// Walk every root and collect the matching paths, in no particular order
    pub fn paths(&self) -> Vec<PathBuf> {
        let (tx, rx) = channel::unbounded();
        self.walk_into(tx);
        rx.into_iter().collect()
    }

    fn walk_root(&self, root: PathBuf, tx: Sender<PathBuf>) {
        log::debug!("Walking {}", root.display());

        if !root.exists() {
            handle_error(ScanError::directory_traversal_error(
                &root,
                "root path does not exist",
            ));
            return;
        }

        let entries = WalkDir::new(&root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    handle_error(traversal_error(&root, err));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let included = entry
                .file_name()
                .to_str()
                .map(|name| self.filter.is_included(name))
                .unwrap_or(false);
            if !included {
                continue;
            }

            if tx.send(entry.into_path()).is_err() {
                log::debug!("Path receiver closed, stopping walk of {}", root.display());
                return;
            }
        }
    }

    /// Excluded entries are skipped; excluded directories are never descended
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        self.filter.is_excluded(entry.path())
    }
}

fn traversal_error(root: &std::path::Path, err: walkdir::Error) -> ScanError {
    let path = err
        .path()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| root.to_path_buf());

    let denied = err
        .io_error()
        .map(|io| io.kind() == std::io::ErrorKind::PermissionDenied)
        .unwrap_or(false);

    if denied {
        ScanError::permission_denied(path)
    } else {
        ScanError::directory_traversal_error(path, err.to_string())
    }
}
