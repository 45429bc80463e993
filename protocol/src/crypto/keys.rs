//! # Key Management
//!
//! Ed25519 key types for password-derived identities.
//!
//! An identity keypair is never stored: it is regenerated from the
//! identity seed every time it is needed and dropped as soon as the
//! signing is done. This module only wraps the key material; the
//! derivation itself lives in [`crate::identity::derivation`].
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (ed25519-dalek's `SigningKey`
//!   does this for us).
//! - `IdentityKeypair` does not implement `Serialize`, and its `Debug`
//!   output only shows the public key.
//! - Key bytes are never logged.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use super::kdf::IdentitySeed;
use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors that can occur while handling raw key material.
///
/// Deliberately vague: the messages never echo the offending bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret key bytes: expected 32 bytes")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid signature bytes: expected 64 bytes")]
    InvalidSignature,
}

/// An Ed25519 keypair derived from a name and password.
///
/// # Examples
///
/// ```
/// use keyticket_protocol::crypto::keys::IdentityKeypair;
///
/// let kp = IdentityKeypair::from_seed(&[7u8; 32]);
/// let sig = kp.sign(b"hello");
/// assert!(kp.verify(b"hello", &sig));
/// ```
pub struct IdentityKeypair {
    signing_key: SigningKey,
}

/// The public half of an identity, as carried in a ticket.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IdentityPublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

/// A 64-byte Ed25519 signature.
///
/// Used both for challenge answers and for the ticket's own signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IdentitySignature {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl IdentityKeypair {
    /// Generate a random keypair from the OS RNG.
    ///
    /// Not part of the ticket flow (identities are always derived), but handy
    /// whenever an unrelated key is needed, e.g. to forge a ticket in tests.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair from a 32-byte Ed25519 secret key.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Build a keypair from a 64-byte identity seed.
    ///
    /// The first 32 bytes of the seed are the Ed25519 secret key; the rest
    /// is discarded with the seed.
    pub fn from_identity_seed(seed: &IdentitySeed) -> Self {
        let mut secret = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        secret.copy_from_slice(&seed[..SECRET_KEY_LENGTH]);
        Self::from_seed(&secret)
    }

    /// Build a keypair from an untyped secret key slice.
    ///
    /// This is the entry point for key material that arrives as bytes of
    /// unknown length; anything but 32 bytes is rejected.
    pub fn try_from_secret_slice(secret: &[u8]) -> Result<Self, KeyError> {
        let bytes: &[u8; SECRET_KEY_LENGTH] =
            secret.try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(bytes))
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> IdentityPublicKey {
        IdentityPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Raw public key bytes.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a message. Deterministic for a given (key, message) pair.
    pub fn sign(&self, message: &[u8]) -> IdentitySignature {
        IdentitySignature {
            bytes: self.signing_key.sign(message).to_bytes(),
        }
    }

    /// Verify a signature against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &IdentitySignature) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Exports the raw 32-byte secret key, wrapped so it is wiped on drop.
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }
}

impl fmt::Debug for IdentityKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityKeypair(pub={})", self.public_key().to_hex())
    }
}

impl PartialEq for IdentityKeypair {
    /// Keypairs compare by public key, so secret bytes are never compared
    /// in variable time.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for IdentityKeypair {}

// ---------------------------------------------------------------------------
// IdentityPublicKey
// ---------------------------------------------------------------------------

impl IdentityPublicKey {
    /// Wrap raw bytes without validating them.
    ///
    /// Tickets carry public keys that nobody has checked yet; whether the
    /// bytes are a usable curve point is only decided at verification time.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse and validate a public key from a slice.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Convert to a `VerifyingKey`. Fails if the bytes are not a valid point.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, KeyError> {
        VerifyingKey::from_bytes(&self.bytes).map_err(|_| KeyError::InvalidPublicKey)
    }

    /// Verify a signature against this public key.
    ///
    /// Returns `false` for an invalid key as well as for a bad signature.
    pub fn verify(&self, message: &[u8], signature: &IdentitySignature) -> bool {
        let Ok(verifying_key) = self.to_verifying_key() else {
            return false;
        };
        verifying_key
            .verify(message, &signature.to_dalek_signature())
            .is_ok()
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key. Does not validate the curve point.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for IdentityPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for IdentityPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityPublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// IdentitySignature
// ---------------------------------------------------------------------------

impl IdentitySignature {
    /// Create a signature from its raw 64-byte representation.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse a signature from a slice of unknown length.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; SIGNATURE_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidSignature)?;
        Ok(Self { bytes })
    }

    /// Returns the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// Convert to the ed25519-dalek `Signature` type.
    pub fn to_dalek_signature(&self) -> DalekSignature {
        DalekSignature::from_bytes(&self.bytes)
    }

    /// Hex-encoded signature. 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded signature.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for IdentitySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for IdentitySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        write!(f, "IdentitySignature({}...{})", &hex_str[..8], &hex_str[120..])
    }
}
