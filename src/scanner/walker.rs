//! Directory walker for recursive file discovery.
//!
//! # Overview
//!
//! This module provides [`walk`], which enumerates every regular file under
//! a set of root directories. It uses [`walkdir`] with sorted directory
//! entries so the result order is deterministic for a given tree.
//!
//! Traversal is all-or-nothing: any unreadable directory aborts the whole
//! walk with a [`TraversalError`], and partial results are discarded. This
//! keeps the walker's contract aligned with the finders, which never expose
//! partially examined inputs either.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::walk;
//! use std::path::PathBuf;
//!
//! let roots = vec![PathBuf::from("photos"), PathBuf::from("backup/photos")];
//! let files = walk(&roots).expect("walk failed");
//! println!("Found {} files", files.len());
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::TraversalError;

/// Recursively collect every regular file under the given roots.
///
/// Directories are visited depth-first with their entries sorted by file
/// name. Symbolic links, device files, and other non-regular entries are
/// excluded from the result without erroring. Identity is path-level:
/// textually identical paths reached through overlapping roots are kept
/// once, while two distinct path strings to the same inode are treated as
/// two entries.
///
/// # Errors
///
/// Fails with a [`TraversalError`] if a root does not exist, is not a
/// directory, or any directory read fails during the walk (permission
/// errors, I/O errors). The error is fatal for the whole walk.
pub fn walk(roots: &[PathBuf]) -> Result<Vec<PathBuf>, TraversalError> {
    let mut files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for root in roots {
        check_root(root)?;
        walk_root(root, &mut files, &mut seen)?;
    }

    log::debug!("Walk discovered {} files under {} roots", files.len(), roots.len());
    Ok(files)
}

/// Verify that a root exists and is a directory before walking it.
fn check_root(root: &Path) -> Result<(), TraversalError> {
    let metadata = fs::metadata(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TraversalError::NotFound(root.to_path_buf())
        } else {
            TraversalError::Io {
                path: root.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(TraversalError::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

/// Walk a single root, appending regular files to `files`.
fn walk_root(
    root: &Path,
    files: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) -> Result<(), TraversalError> {
    let walk_dir = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry_result in walk_dir {
        let entry = entry_result.map_err(walkdir_error)?;

        // Only regular files can be duplicates; directories, symlinks,
        // and device files are skipped.
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if seen.insert(path.clone()) {
            files.push(path);
        } else {
            log::trace!("Skipping already-discovered path: {}", path.display());
        }
    }

    Ok(())
}

/// Convert a walkdir error into a fatal [`TraversalError`].
fn walkdir_error(error: walkdir::Error) -> TraversalError {
    let path = error
        .path()
        .map_or_else(PathBuf::new, Path::to_path_buf);
    log::warn!("Walker error for {}: {}", path.display(), error);

    let source = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory traversal failed"));
    TraversalError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    /// Create a test directory with two files at the top and one nested.
    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        let file1 = dir.path().join("file1.txt");
        let mut f = File::create(&file1).unwrap();
        writeln!(f, "Hello, world!").unwrap();

        let file2 = dir.path().join("file2.txt");
        let mut f = File::create(&file2).unwrap();
        writeln!(f, "Another file").unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let file3 = subdir.join("nested.txt");
        let mut f = File::create(&file3).unwrap();
        writeln!(f, "Nested file content").unwrap();

        dir
    }

    #[test]
    fn test_walk_finds_files_recursively() {
        let dir = create_test_dir();
        let files = walk(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(files.len(), 3);
        for file in &files {
            assert!(file.is_file());
        }
        assert!(files.iter().any(|p| p.ends_with("subdir/nested.txt")));
    }

    #[test]
    fn test_walk_excludes_directories() {
        let dir = create_test_dir();
        let files = walk(&[dir.path().to_path_buf()]).unwrap();

        assert!(!files.iter().any(|p| p.ends_with("subdir")));
    }

    #[test]
    fn test_walk_multiple_roots() {
        let dir1 = create_test_dir();
        let dir2 = TempDir::new().unwrap();
        File::create(dir2.path().join("only.txt"))
            .unwrap()
            .write_all(b"solo")
            .unwrap();

        let roots = vec![dir1.path().to_path_buf(), dir2.path().to_path_buf()];
        let files = walk(&roots).unwrap();

        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_walk_overlapping_roots_deduplicates_paths() {
        let dir = create_test_dir();
        let sub = dir.path().join("subdir");

        // subdir is reachable through both roots under the same path text
        let roots = vec![dir.path().to_path_buf(), sub];
        let files = walk(&roots).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let roots = vec![PathBuf::from("totally bogus path")];
        let err = walk(&roots).unwrap_err();
        assert!(matches!(err, TraversalError::NotFound(_)));
    }

    #[test]
    fn test_walk_file_root_fails() {
        let dir = create_test_dir();
        let roots = vec![dir.path().join("file1.txt")];

        let err = walk(&roots).unwrap_err();
        assert!(matches!(err, TraversalError::NotADirectory(_)));
    }

    #[test]
    fn test_walk_order_is_deterministic() {
        let dir = create_test_dir();
        let roots = vec![dir.path().to_path_buf()];

        let first = walk(&roots).unwrap();
        let second = walk(&roots).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_excludes_symlinks() {
        let dir = create_test_dir();
        let target = dir.path().join("file1.txt");
        let link = dir.path().join("link-to-file1");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let files = walk(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(files.len(), 3);
        assert!(!files.contains(&link));
    }
}
