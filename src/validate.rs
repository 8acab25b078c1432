//! Validation of user-supplied scan roots.
//!
//! The CLI layer runs [`validate_roots`] on its directory arguments before
//! handing them to the engine; the engine itself assumes valid roots.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::validate::validate_roots;
//! use std::path::PathBuf;
//!
//! let roots = vec![PathBuf::from("/home/user/Downloads")];
//! validate_roots(&roots).expect("not a scannable directory");
//! ```

use std::fs;
use std::path::PathBuf;

/// Errors produced when scan roots fail validation.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    /// No directories were supplied at all.
    #[error("No directories were given")]
    NoDirectories,

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Check that every candidate root exists and is a directory.
///
/// Succeeds only for a non-empty set of existing directories. Fails with
/// the first offending path otherwise. Performs no side effects beyond
/// reading file system metadata.
///
/// # Errors
///
/// Returns [`ValidationError::NoDirectories`] for an empty input,
/// [`ValidationError::NotFound`] if a path cannot be stat'ed, and
/// [`ValidationError::NotADirectory`] if a path resolves to a non-directory.
pub fn validate_roots(paths: &[PathBuf]) -> Result<(), ValidationError> {
    if paths.is_empty() {
        return Err(ValidationError::NoDirectories);
    }

    for path in paths {
        let metadata =
            fs::metadata(path).map_err(|_| ValidationError::NotFound(path.clone()))?;
        if !metadata.is_dir() {
            return Err(ValidationError::NotADirectory(path.clone()));
        }
    }

    Ok(())
}
