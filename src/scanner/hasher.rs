//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! This module computes BLAKE3 content digests of whole files using
//! memory-efficient streaming: file bytes are copied into the hasher
//! through a buffered reader in a single pass, so even very large files
//! never need to fit in memory.
//!
//! Two files with identical content always produce identical digests;
//! BLAKE3 is cryptographically secure, so collisions are treated as
//! impossible for correctness purposes.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::HashError;

/// A 256-bit BLAKE3 content digest.
pub type Digest = [u8; 32];

/// Hash the full contents of a single file.
///
/// Opens the file and streams every byte into a BLAKE3 hasher in exactly
/// one read pass, with no retry. The caller never receives a partial
/// digest: any open or mid-stream read failure aborts the whole hash.
///
/// # Errors
///
/// Returns a [`HashError`] if the file cannot be opened or a read fails
/// partway through.
pub fn hash_file(path: &Path) -> Result<Digest, HashError> {
    let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut hasher = blake3::Hasher::new();
    io::copy(&mut reader, &mut hasher).map_err(|e| HashError::from_io(path, e))?;

    Ok(*hasher.finalize().as_bytes())
}

/// Render a digest as a 64-character lowercase hex string.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
