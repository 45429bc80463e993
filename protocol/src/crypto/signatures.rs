//! # Digital Signatures
//!
//! Ed25519 signing and verification for identity tickets.
//!
//! The ticket protocol never signs a message directly. It signs the
//! SHA-256 digest of the message, and the verifier recomputes that digest
//! before checking. Ed25519 already hashes internally with SHA-512, so the
//! extra SHA-256 adds nothing cryptographically, but it is part of the wire
//! format and every existing ticket depends on it. [`sign_hashed`] and
//! [`verify_hashed`] are the only places that construction appears.

use super::hash::{sha256, Digest256};
use super::keys::{IdentityKeypair, IdentityPublicKey, IdentitySignature};

/// Sign the SHA-256 digest of `message`.
///
/// # Example
///
/// ```
/// use keyticket_protocol::crypto::keys::IdentityKeypair;
/// use keyticket_protocol::crypto::signatures::{sign_hashed, verify_hashed};
///
/// let kp = IdentityKeypair::from_seed(&[1u8; 32]);
/// let sig = sign_hashed(&kp, b"challenge");
/// assert!(verify_hashed(&kp.public_key(), b"challenge", &sig));
/// ```
pub fn sign_hashed(keypair: &IdentityKeypair, message: &[u8]) -> IdentitySignature {
    sign_digest(keypair, &sha256(message))
}

/// Sign an already computed SHA-256 digest.
pub fn sign_digest(keypair: &IdentityKeypair, digest: &Digest256) -> IdentitySignature {
    keypair.sign(digest)
}

/// Verify a signature made with [`sign_hashed`].
pub fn verify_hashed(
    public_key: &IdentityPublicKey,
    message: &[u8],
    signature: &IdentitySignature,
) -> bool {
    verify_digest(public_key, &sha256(message), signature)
}

/// Verify a signature over an already computed SHA-256 digest.
pub fn verify_digest(
    public_key: &IdentityPublicKey,
    digest: &Digest256,
    signature: &IdentitySignature,
) -> bool {
    public_key.verify(digest, signature)
}
