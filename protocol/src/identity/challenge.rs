//! Challenge issuing and solving.
//!
//! A verifier hands out a random challenge; the client proves it holds the
//! derived private key by signing SHA-256 of that challenge. The answer is
//! a plain 64-byte Ed25519 signature.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::DEFAULT_CHALLENGE_LENGTH;
use crate::crypto::keys::{IdentityKeypair, IdentitySignature, KeyError};
use crate::crypto::signatures::{sign_hashed, verify_hashed};
use crate::crypto::IdentityPublicKey;

/// The answer to a challenge: an Ed25519 signature over `SHA256(challenge)`.
pub type ChallengeAnswer = IdentitySignature;

/// Generate `length` bytes of challenge from the OS CSPRNG.
pub fn generate_random_challenge(length: usize) -> Vec<u8> {
    let mut challenge = vec![0u8; length];
    OsRng.fill_bytes(&mut challenge);
    challenge
}

/// Generate a challenge of [`DEFAULT_CHALLENGE_LENGTH`] bytes.
pub fn generate_default_challenge() -> Vec<u8> {
    generate_random_challenge(DEFAULT_CHALLENGE_LENGTH)
}

/// Sign a challenge with an identity keypair.
///
/// Deterministic: the same challenge and key always produce the same answer.
pub fn solve_challenge(challenge: &[u8], keypair: &IdentityKeypair) -> ChallengeAnswer {
    sign_hashed(keypair, challenge)
}

/// Sign a challenge with raw secret key bytes.
///
/// Fails with [`KeyError::InvalidSecretKey`] unless `private_key` is exactly
/// 32 bytes long.
pub fn solve_challenge_raw(
    challenge: &[u8],
    private_key: &[u8],
) -> Result<ChallengeAnswer, KeyError> {
    let keypair = IdentityKeypair::try_from_secret_slice(private_key)?;
    Ok(solve_challenge(challenge, &keypair))
}

/// Check a challenge answer against a public key.
pub fn check_challenge_answer(
    challenge: &[u8],
    public_key: &IdentityPublicKey,
    answer: &ChallengeAnswer,
) -> bool {
    verify_hashed(public_key, challenge, answer)
}
