//! Content hashing for change detection.
//!
//! Hashes the exact bytes that get embedded and persisted, computed after
//! SVG normalization so a no-op re-run yields identical digests and can
//! skip disk writes. Uses blake3, hex-encoded.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Hex digest of a byte slice.
#[inline]
pub fn hash_bytes<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Hex digest of a file's contents.
///
/// A missing or unreadable file yields the empty-string sentinel, matching
/// the manifest's `hash: ""` convention.
pub fn hash_file(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return String::new(),
    };

    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => return String::new(),
        }
    }

    hex::encode(hasher.finalize().as_bytes())
}
