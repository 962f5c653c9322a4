//! SHA-256 content hash computation
//!
//! The content hash is the canonical external identifier for a record:
//! - Computed over the UTF-8 byte encoding of the value
//! - Rendered as lowercase hexadecimal
//! - Stable across repeated calls and across process restarts

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of a string's UTF-8 bytes as lowercase hex.
///
/// This function is deterministic: the same input always produces the same
/// output.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();

    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
