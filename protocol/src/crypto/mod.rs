//! # Cryptographic Primitives
//!
//! Thin, typed wrappers around the three audited primitives the ticket
//! protocol is built from:
//!
//! - **SHA-256** (`sha2`) for every digest.
//! - **PBKDF2-HMAC-SHA256** (`pbkdf2`) for turning credentials into a seed.
//! - **Ed25519** (`ed25519-dalek`) for signing and verification.
//!
//! Nothing here is hand-rolled. The wrappers exist so that the
//! digest-then-sign construction and the seed layout are written down in
//! exactly one place.

pub mod hash;
pub mod kdf;
pub mod keys;
pub mod signatures;

pub use hash::{sha256, sha256_multi, Digest256};
pub use kdf::{derive_seed, truncate_name, IdentitySeed};
pub use keys::{IdentityKeypair, IdentityPublicKey, IdentitySignature, KeyError};
pub use signatures::{sign_digest, sign_hashed, verify_digest, verify_hashed};
