//! Ticket construction.
//!
//! Building a ticket is the client side of a login:
//!
//! 1. Derive the keypair from (name, password).
//! 2. Answer the challenge: sign `SHA256(challenge)`.
//! 3. Encode `nameLength ++ name ++ publicKey ++ challengeAnswer`.
//! 4. Sign `SHA256(prefix)` and append the signature.
//!
//! The keypair exists only for the duration of the call.

use super::codec::{encode_unsigned, IdentityTicket};
use crate::config::TICKET_OVERHEAD;
use crate::crypto::hash::sha256;
use crate::crypto::keys::IdentityKeypair;
use crate::crypto::signatures::sign_digest;
use crate::identity::{derive_keypair_from_bytes, solve_challenge};

/// Build an identity ticket for `name`/`password` answering `challenge`.
///
/// # Example
///
/// ```
/// use keyticket_protocol::ticket::{create_identity_ticket, verify_identity_ticket};
///
/// let challenge = [0u8; 32];
/// let ticket = create_identity_ticket("alice", "correct horse battery staple", &challenge);
/// assert_eq!(ticket.len(), 5 + 162);
/// assert!(verify_identity_ticket(ticket.as_bytes(), &challenge));
/// ```
pub fn create_identity_ticket(name: &str, password: &str, challenge: &[u8]) -> IdentityTicket {
    create_identity_ticket_from_bytes(name.as_bytes(), password.as_bytes(), challenge)
}

/// Byte-level variant of [`create_identity_ticket`].
pub fn create_identity_ticket_from_bytes(
    name: &[u8],
    password: &[u8],
    challenge: &[u8],
) -> IdentityTicket {
    let keypair = derive_keypair_from_bytes(name, password);
    sign_identity_ticket(name, &keypair, challenge)
}

/// Signing step of [`create_identity_ticket`]: answer the challenge, encode
/// the prefix and sign it with `keypair`.
///
/// `keypair` is expected to have just been derived for this one ticket and
/// dropped afterwards.
pub fn sign_identity_ticket(
    name: &[u8],
    keypair: &IdentityKeypair,
    challenge: &[u8],
) -> IdentityTicket {
    let challenge_answer = solve_challenge(challenge, keypair);
    let mut ticket = encode_unsigned(name, &keypair.public_key(), &challenge_answer);
    let signature = sign_digest(keypair, &sha256(&ticket));
    ticket.extend_from_slice(signature.as_bytes());

    tracing::debug!(
        name_len = ticket.len() - TICKET_OVERHEAD,
        ticket_len = ticket.len(),
        challenge_len = challenge.len(),
        "identity ticket created"
    );
    IdentityTicket::from_encoded(ticket)
}
