//! Ticket verification.
//!
//! Verification answers one question: did whoever built this ticket hold
//! the private key for the public key inside it, and did they use it on
//! *this* challenge? Two independent Ed25519 checks, both against the
//! embedded public key:
//!
//! - the ticket signature over `SHA256(unsigned prefix)`,
//! - the challenge answer over `SHA256(challenge)`.
//!
//! The unsigned prefix digest is recomputed from the decoded fields. The
//! caller's buffer is only ever read.
//!
//! Verification is total. Malformed input, invalid curve points and bad
//! signatures all come back as `false` (or a [`TicketRejection`] from the
//! detailed variant); nothing panics and nothing propagates.

use super::codec::{decode, DecodedTicket};
use super::error::TicketRejection;
use crate::crypto::hash::sha256;
use crate::crypto::signatures::verify_digest;

/// Verify a ticket against the challenge it is supposed to answer.
pub fn verify_identity_ticket(ticket: &[u8], challenge_question: &[u8]) -> bool {
    verify_identity_ticket_detailed(ticket, challenge_question).is_ok()
}

/// Verify a ticket and, on success, return its decoded fields.
///
/// On failure the [`TicketRejection`] says which check failed. When both
/// signatures are bad, the ticket signature is reported.
pub fn verify_identity_ticket_detailed(
    ticket: &[u8],
    challenge_question: &[u8],
) -> Result<DecodedTicket, TicketRejection> {
    let decoded = decode(ticket).map_err(|e| {
        tracing::debug!(ticket_len = ticket.len(), error = %e, "rejecting malformed ticket");
        TicketRejection::from(e)
    })?;

    if decoded.public_key().to_verifying_key().is_err() {
        tracing::debug!(ticket_len = ticket.len(), "rejecting ticket with invalid public key");
        return Err(TicketRejection::InvalidPublicKey);
    }

    let unsigned_digest = decoded.unsigned_digest();
    let challenge_digest = sha256(challenge_question);

    let signature_ok = verify_digest(decoded.public_key(), &unsigned_digest, decoded.signature());
    let challenge_ok = verify_digest(
        decoded.public_key(),
        &challenge_digest,
        decoded.challenge_answer(),
    );

    match (signature_ok, challenge_ok) {
        (true, true) => {
            tracing::debug!(
                name_len = decoded.name_length(),
                public_key = %decoded.public_key(),
                "identity ticket verified"
            );
            Ok(decoded)
        }
        (false, _) => {
            tracing::debug!(challenge_ok, "rejecting ticket: bad ticket signature");
            Err(TicketRejection::BadTicketSignature)
        }
        (true, false) => {
            tracing::debug!("rejecting ticket: challenge answer does not match");
            Err(TicketRejection::BadChallengeAnswer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICKET_OVERHEAD;
    use crate::crypto::keys::IdentityKeypair;
    use crate::ticket::builder::{create_identity_ticket, sign_identity_ticket};
    use crate::ticket::codec::DecodedTicket;
    use crate::ticket::error::TicketError;

    const PASSWORD: &str = "correct horse battery staple";

    #[test]
    fn test_valid_ticket_verifies() {
        let challenge = [0u8; 32];
        let ticket = create_identity_ticket("alice", PASSWORD, &challenge);
        assert_eq!(ticket.len(), 167);
        assert!(verify_identity_ticket(ticket.as_bytes(), &challenge));
    }

    #[test]
    fn test_flipped_challenge_bit_rejected() {
        let challenge = [0u8; 32];
        let ticket = create_identity_ticket("alice", PASSWORD, &challenge);
        let mut other = challenge;
        other[31] ^= 0x01;
        assert_eq!(
            verify_identity_ticket_detailed(ticket.as_bytes(), &other).unwrap_err(),
            TicketRejection::BadChallengeAnswer
        );
    }

    #[test]
    fn test_detailed_returns_fields() {
        let ticket = create_identity_ticket("alice", PASSWORD, b"c");
        let decoded = verify_identity_ticket_detailed(ticket.as_bytes(), b"c").unwrap();
        assert_eq!(decoded.name(), "alice");
    }

    #[test]
    fn test_every_single_byte_mutation_rejected() {
        let challenge = b"tamper test";
        let ticket = create_identity_ticket("alice", PASSWORD, challenge);
        for i in 0..ticket.len() {
            let mut bytes = ticket.as_bytes().to_vec();
            bytes[i] ^= 0x01;
            assert!(
                !verify_identity_ticket(&bytes, challenge),
                "mutation at byte {} verified",
                i
            );
        }
    }

    #[test]
    fn test_short_buffers_rejected() {
        let ticket = create_identity_ticket("", PASSWORD, b"c");
        assert_eq!(ticket.len(), TICKET_OVERHEAD);
        for len in 0..TICKET_OVERHEAD {
            assert!(!verify_identity_ticket(&ticket.as_bytes()[..len], b"c"));
        }
        assert!(!verify_identity_ticket(&[], b"c"));
        assert!(matches!(
            verify_identity_ticket_detailed(&[1], b"c"),
            Err(TicketRejection::Malformed(TicketError::MalformedTicket { .. }))
        ));
    }

    #[test]
    fn test_trailing_bytes_do_not_affect_verification() {
        let challenge = [0u8; 32];
        let ticket = create_identity_ticket("alice", PASSWORD, &challenge);
        let mut bytes = ticket.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xaa, 0xbb, 0xcc]);

        let decoded = verify_identity_ticket_detailed(&bytes, &challenge).unwrap();
        assert_eq!(decoded.encoded_len(), 167);
        assert_eq!(decoded.to_bytes(), ticket.as_bytes());
    }

    #[test]
    fn test_verification_does_not_mutate_input() {
        let ticket = create_identity_ticket("alice", PASSWORD, b"c");
        let bytes = ticket.as_bytes().to_vec();
        assert!(verify_identity_ticket(&bytes, b"c"));
        assert_eq!(bytes, ticket.as_bytes());
        // Verifying twice still works: nothing was stripped.
        assert!(verify_identity_ticket(&bytes, b"c"));
    }

    #[test]
    fn test_swapped_public_key_rejected() {
        // Someone replaces the key and answer with their own but cannot
        // re-sign under the victim's key.
        let challenge = b"c";
        let ticket = create_identity_ticket("alice", PASSWORD, challenge);
        let decoded = ticket.decode().unwrap();
        let attacker = IdentityKeypair::generate();
        let forged = DecodedTicket::from_parts(
            decoded.name_bytes(),
            attacker.public_key(),
            *decoded.challenge_answer(),
            *decoded.signature(),
        );
        assert_eq!(
            verify_identity_ticket_detailed(&forged.to_bytes(), challenge).unwrap_err(),
            TicketRejection::BadTicketSignature
        );
    }

    #[test]
    fn test_ticket_signed_by_other_key_proves_that_key_only() {
        // A self-consistent ticket under a random key verifies, but carries
        // a different public key than alice's derived one.
        let other = IdentityKeypair::generate();
        let ticket = sign_identity_ticket(b"alice", &other, b"c");
        let decoded = verify_identity_ticket_detailed(ticket.as_bytes(), b"c").unwrap();
        let alice = crate::identity::derive_keypair("alice", PASSWORD);
        assert_ne!(decoded.public_key(), &alice.public_key());
    }

    #[test]
    fn test_invalid_public_key_rejected() {
        let ticket = create_identity_ticket("a", PASSWORD, b"c");
        let decoded = ticket.decode().unwrap();
        // Find some 32-byte pattern that does not decompress.
        let bad_key = (0u8..=255)
            .map(|b| {
                let mut bytes = [b; 32];
                bytes[31] &= 0x7f;
                bytes
            })
            .find(|bytes| {
                crate::crypto::IdentityPublicKey::try_from_slice(bytes).is_err()
            })
            .expect("some byte pattern is not a valid point");
        let forged = DecodedTicket::from_parts(
            decoded.name_bytes(),
            crate::crypto::IdentityPublicKey::from_bytes(bad_key),
            *decoded.challenge_answer(),
            *decoded.signature(),
        );
        assert_eq!(
            verify_identity_ticket_detailed(&forged.to_bytes(), b"c").unwrap_err(),
            TicketRejection::InvalidPublicKey
        );
        assert!(!verify_identity_ticket(&forged.to_bytes(), b"c"));
    }
}
