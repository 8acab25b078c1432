//! Duplicate finder implementation.
//!
//! # Overview
//!
//! Both finders turn a flat list of file paths into a [`Grouping`]: a map
//! from content digest to every path whose bytes produced that digest.
//! Groups of one are retained; filtering singletons is the report layer's
//! job, not the engine's.
//!
//! [`find_duplicates`] hashes the paths one at a time on the calling
//! thread. [`find_duplicates_concurrently`] spawns one rayon task per path
//! and fans the results into a single mpsc channel; the calling thread is
//! the sole aggregator, so the grouping needs no locks.
//!
//! Both are all-or-nothing: any hashing failure voids the entire result.
//! A partial grouping would be misleading, reporting "no duplicates" for
//! files that were never actually examined.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::find_duplicates_concurrently;
//! use dupescan::scanner::walk;
//! use std::path::PathBuf;
//!
//! let files = walk(&[PathBuf::from(".")]).expect("walk failed");
//! let grouping = find_duplicates_concurrently(&files).expect("hashing failed");
//! for (digest, paths) in &grouping {
//!     if paths.len() > 1 {
//!         println!("{}: {} copies", dupescan::scanner::digest_to_hex(digest), paths.len());
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;

use crate::scanner::{hash_file, Digest, HashError};

/// Mapping from content digest to every path sharing that digest.
///
/// Paths appear in the order their hash result was accepted by the
/// aggregator; for the concurrent finder that order is unspecified within
/// a group.
pub type Grouping = HashMap<Digest, Vec<PathBuf>>;

/// Outcome of hashing one file, tagged with its path.
///
/// Exactly one of these exists per input path; it is the unit of
/// communication between a hashing task and its aggregator.
#[derive(Debug)]
pub struct HashResult {
    /// The file that was hashed.
    pub path: PathBuf,
    /// The digest, or the error that prevented computing it.
    pub outcome: Result<Digest, HashError>,
}

/// Find files with identical content, hashing sequentially.
///
/// Hashes each path in order and appends it to the group for its digest.
/// Fails fast: the first [`HashError`] aborts the whole operation with that
/// error and no grouping, even if later files would have hashed
/// successfully.
///
/// # Errors
///
/// Returns the first [`HashError`] encountered.
pub fn find_duplicates(paths: &[PathBuf]) -> Result<Grouping, HashError> {
    log::debug!("Hashing {} files sequentially", paths.len());

    let mut grouping = Grouping::new();
    for path in paths {
        let digest = hash_file(path)?;
        grouping.entry(digest).or_default().push(path.clone());
    }

    Ok(grouping)
}

/// Find files with identical content, hashing in parallel.
///
/// Spawns one rayon task per path; each task hashes its own file and
/// delivers exactly one [`HashResult`] to a shared channel. The calling
/// thread drains exactly one result per input path and is the sole writer
/// of the grouping.
///
/// Error semantics match [`find_duplicates`] from the caller's point of
/// view: the first error encountered is returned and no grouping is
/// produced. Internally the channel is still drained to completion, so no
/// task is ever left blocked on a send nobody is receiving. There is no
/// mid-flight cancellation; a launched task always runs to completion.
///
/// The resulting grouping is identical to a sequential run over the same
/// input set, except that path order within a group is unspecified.
///
/// # Errors
///
/// Returns the first [`HashError`] received.
pub fn find_duplicates_concurrently(paths: &[PathBuf]) -> Result<Grouping, HashError> {
    log::debug!("Hashing {} files concurrently", paths.len());

    let (tx, rx) = mpsc::channel();
    for path in paths {
        let tx = tx.clone();
        let path = path.clone();
        rayon::spawn(move || hash_task(path, &tx));
    }
    // The aggregator holds no sender; receiving ends once every task
    // has delivered its result.
    drop(tx);

    let mut grouping = Grouping::new();
    let mut first_error = None;

    for result in rx {
        match result.outcome {
            Ok(digest) => {
                // Stop folding successes once an error is recorded, but
                // keep draining so no task blocks forever.
                if first_error.is_none() {
                    grouping.entry(digest).or_default().push(result.path);
                }
            }
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    log::debug!("Discarding subsequent hash error for {}", result.path.display());
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(grouping),
    }
}

/// Hash one file and deliver the result to the aggregator's channel.
///
/// A send only fails if the receiver is gone, and the aggregator keeps
/// receiving until every task has reported, so the result is never lost.
fn hash_task(path: PathBuf, results: &mpsc::Sender<HashResult>) {
    let outcome = hash_file(&path);
    let _ = results.send(HashResult { path, outcome });
}
