use ignore::WalkBuilder;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use std::path::{Path, PathBuf};

use crate::core::error::{LibrarianError, Result};

/// How the directory tree is walked
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Lowercase note extensions without the leading dot
    pub extensions: FxHashSet<String>,
    /// Visit siblings in file name order
    pub sort: bool,
    /// Honour .gitignore and .ignore files
    pub respect_ignore_files: bool,
}

/// Note files found under a root, plus the entries that could not be visited
#[derive(Debug, Default)]
pub struct NoteWalk {
    pub notes: Vec<PathBuf>,
    pub errors: Vec<LibrarianError>,
}

/// Check that `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(LibrarianError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LibrarianError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Returns true when the case-folded `file_name` ends with `.` plus one of `extensions`.
///
/// Multi-part extensions such as `notes.md` are checked at every dot, so a
/// name matches exactly when it would match a plain suffix comparison.
pub fn is_note_file(file_name: &str, extensions: &FxHashSet<String>) -> bool {
    let lowered = file_name.to_lowercase();
    lowered
        .match_indices('.')
        .any(|(idx, _)| extensions.contains(&lowered[idx + 1..]))
}

/// Recursively collect note files under `root`.
///
/// Directories are descended without a depth limit. Symbolic links to
/// directories are not followed. Any other link with a note name is kept,
/// including a dangling one, so reading it later reports the broken target.
/// Entries that fail to load end up in [`NoteWalk::errors`] and the walk
/// carries on. Failing to list `root` itself stops the walk.
pub fn walk_notes(root: &Path, options: &WalkOptions) -> Result<NoteWalk> {
    check_root(root)?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(options.respect_ignore_files)
        .hidden(false) // Include hidden files
        .follow_links(false);
    if options.respect_ignore_files {
        builder.require_git(false);
    }
    if options.sort {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut walk = NoteWalk::default();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                walk.errors.push(walk_error(root, err)?);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let entry_path = entry.path();
        let is_candidate = match entry.file_type() {
            Some(ft) if ft.is_symlink() => !entry_path.is_dir(),
            Some(ft) => ft.is_file(),
            None => false,
        };
        let file_name = entry.file_name().to_string_lossy();
        if is_candidate && is_note_file(&file_name, &options.extensions) {
            trace!("Found note {}", entry_path.display());
            walk.notes.push(entry_path.to_path_buf());
        }
    }

    debug!(
        "Walked {}: {} note(s), {} error(s)",
        root.display(),
        walk.notes.len(),
        walk.errors.len()
    );

    Ok(walk)
}

/// Turn a walk error into a per-entry error, or fail when it is about `root`.
fn walk_error(root: &Path, err: ignore::Error) -> Result<LibrarianError> {
    let path = error_path(&err);
    if err.depth() == Some(0) || path.as_deref() == Some(root) {
        return Err(LibrarianError::RootUnreadable {
            path: root.to_path_buf(),
            source: err,
        });
    }
    Ok(LibrarianError::Traversal { path, source: err })
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
