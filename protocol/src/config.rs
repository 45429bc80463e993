//! # Protocol Configuration & Constants
//!
//! Every magic number in the ticket protocol lives here. Both ends of a
//! deployment (the client building tickets and the server verifying them)
//! must agree on every value in this file, because none of it travels on
//! the wire. Change one and every ticket ever issued stops verifying.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Protocol version string. Not embedded in tickets; callers agree on it
/// out of band (e.g. an API version header or a handshake field).
pub const PROTOCOL_VERSION: &str = "0.2";

// ---------------------------------------------------------------------------
// Key Derivation
// ---------------------------------------------------------------------------

/// PBKDF2-HMAC-SHA256 iteration count for the identity seed.
///
/// Low by modern password-storage standards, but it is part of the wire
/// contract: a different count yields a different keypair for the same
/// credentials.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Length of the PBKDF2 output (the identity seed) in bytes.
pub const SEED_LENGTH: usize = 64;

/// Ed25519 secret key length. The first `SECRET_KEY_LENGTH` bytes of the
/// identity seed become the signing key.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Largest name, in UTF-8 bytes, that fits the 2-byte length prefix.
/// Longer names are silently truncated at this byte offset.
pub const MAX_NAME_LENGTH: usize = u16::MAX as usize;

// ---------------------------------------------------------------------------
// Ticket Layout
// ---------------------------------------------------------------------------

/// Width of the little-endian `nameLength` prefix.
pub const NAME_LENGTH_PREFIX: usize = 2;

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Used for both the challenge answer and the
/// ticket signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// SHA-256 digest length.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Everything in a ticket except the name itself:
/// `nameLength(2) + publicKey(32) + challengeAnswer(64) + signature(64)`.
pub const TICKET_OVERHEAD: usize =
    NAME_LENGTH_PREFIX + PUBLIC_KEY_LENGTH + SIGNATURE_LENGTH + SIGNATURE_LENGTH;

/// Length of the unsigned prefix for an empty name.
pub const UNSIGNED_OVERHEAD: usize = TICKET_OVERHEAD - SIGNATURE_LENGTH;

/// Largest possible ticket (a maximum-length name).
pub const MAX_TICKET_LENGTH: usize = MAX_NAME_LENGTH + TICKET_OVERHEAD;

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

/// Default size of a random challenge, in bytes.
pub const DEFAULT_CHALLENGE_LENGTH: usize = 512;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Total encoded ticket length for a name of `name_len` bytes.
pub const fn ticket_length(name_len: usize) -> usize {
    name_len + TICKET_OVERHEAD
}
