//! # Identity Seed Derivation
//!
//! Turns a (name, password) pair into a 64-byte seed with
//! PBKDF2-HMAC-SHA256. The construction is fixed by the wire protocol:
//!
//! ```text
//! nameHash     = SHA256(name)
//! passwordHash = SHA256(password)
//! seed         = PBKDF2-HMAC-SHA256(
//!                    password   = nameHash ++ passwordHash,
//!                    salt       = nameHash,
//!                    iterations = 4096,
//!                    length     = 64)
//! ```
//!
//! The seed only ever lives in a [`Zeroizing`] buffer.

use sha2::Sha256;
use zeroize::Zeroizing;

use super::hash::sha256;
use crate::config::{HASH_OUTPUT_LENGTH, MAX_NAME_LENGTH, PBKDF2_ITERATIONS, SEED_LENGTH};

/// A derived identity seed. Wiped from memory on drop.
pub type IdentitySeed = Zeroizing<[u8; SEED_LENGTH]>;

/// Truncate a name to the largest length the ticket prefix can describe.
///
/// Truncation is by byte, not by character: a multi-byte UTF-8 sequence
/// straddling the limit is cut. The derived keypair and the encoded ticket
/// both see the same truncated bytes, so this is consistent end to end.
pub fn truncate_name(name: &[u8]) -> &[u8] {
    &name[..name.len().min(MAX_NAME_LENGTH)]
}

/// Derive the identity seed for a name and password.
///
/// `name` is truncated with [`truncate_name`] before hashing.
pub fn derive_seed(name: &[u8], password: &[u8]) -> IdentitySeed {
    let name_hash = sha256(truncate_name(name));
    let password_hash = Zeroizing::new(sha256(password));

    let mut kdf_input = Zeroizing::new([0u8; HASH_OUTPUT_LENGTH * 2]);
    kdf_input[..HASH_OUTPUT_LENGTH].copy_from_slice(&name_hash);
    kdf_input[HASH_OUTPUT_LENGTH..].copy_from_slice(password_hash.as_slice());

    let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
    pbkdf2::pbkdf2_hmac::<Sha256>(
        kdf_input.as_slice(),
        &name_hash,
        PBKDF2_ITERATIONS,
        seed.as_mut_slice(),
    );
    seed
}
