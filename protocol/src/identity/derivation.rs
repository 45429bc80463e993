//! Deterministic keypair derivation from a name and password.
//!
//! The same (name, password) pair always yields the same Ed25519 keypair,
//! on every machine, forever. That is what lets a client log in without
//! storing a key: it simply derives it again.

use crate::crypto::kdf::derive_seed;
use crate::crypto::keys::IdentityKeypair;

/// Derive the identity keypair for `name` and `password`.
///
/// Names longer than 65535 UTF-8 bytes are truncated to exactly that many
/// bytes before hashing. Empty names and passwords are valid.
///
/// # Example
///
/// ```
/// use keyticket_protocol::identity::derive_keypair;
///
/// let a = derive_keypair("alice", "correct horse battery staple");
/// let b = derive_keypair("alice", "correct horse battery staple");
/// assert_eq!(a.public_key(), b.public_key());
/// ```
pub fn derive_keypair(name: &str, password: &str) -> IdentityKeypair {
    derive_keypair_from_bytes(name.as_bytes(), password.as_bytes())
}

/// Byte-level variant of [`derive_keypair`].
///
/// Useful when the name comes out of a decoded ticket, where it is raw
/// bytes and may not even be valid UTF-8 after truncation.
pub fn derive_keypair_from_bytes(name: &[u8], password: &[u8]) -> IdentityKeypair {
    let seed = derive_seed(name, password);
    let keypair = IdentityKeypair::from_identity_seed(&seed);
    tracing::trace!(name_len = name.len(), "derived identity keypair");
    keypair
}
