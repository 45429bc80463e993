//! # Hashing Utilities
//!
//! SHA-256 is the only hash in the ticket protocol. It appears in three
//! places, and all three must agree byte-for-byte between signer and
//! verifier:
//!
//! - hashing the name and password before key derivation,
//! - hashing the challenge before it is signed,
//! - hashing the unsigned ticket prefix before it is signed.
//!
//! Everything here hashes raw bytes. Never hash a string re-encoding of
//! binary data (hex, base64, lossy UTF-8): the two sides will disagree the
//! first time a public key contains a byte sequence that isn't valid UTF-8.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// A SHA-256 digest.
pub type Digest256 = [u8; HASH_OUTPUT_LENGTH];

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use keyticket_protocol::crypto::sha256;
///
/// let digest = sha256(b"keyticket");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Digest256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices as if they were concatenated.
///
/// Lets the verifier hash the unsigned prefix straight from decoded fields
/// without first assembling a temporary buffer.
pub fn sha256_multi(parts: &[&[u8]]) -> Digest256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
