//! # Identity Module
//!
//! Password-derived identities. There is no key store: a participant is
//! whoever can regenerate the keypair for a (name, password) pair.
//!
//! 1. **Derivation**: (name, password) → SHA-256 → PBKDF2 → Ed25519 keypair.
//! 2. **Challenge**: random challenges and the signatures that answer them.

pub mod challenge;
pub mod derivation;

pub use challenge::{
    check_challenge_answer, generate_default_challenge, generate_random_challenge,
    solve_challenge, solve_challenge_raw, ChallengeAnswer,
};
pub use derivation::{derive_keypair, derive_keypair_from_bytes};
