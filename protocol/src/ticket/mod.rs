//! # Identity Tickets
//!
//! A ticket is a self-contained, self-signed proof that its creator knows
//! the password for a name and has answered a specific challenge.
//!
//! ```text
//!   ┌──────────┐                               ┌──────────┐
//!   │  Client  │                               │  Server  │
//!   └────┬─────┘                               └────┬─────┘
//!        │                                          │
//!        │        1. challenge (random bytes)       │
//!        │◄─────────────────────────────────────────┤
//!        │                                          │
//!        │  derive keypair(name, password)          │
//!        │  answer = sign(SHA256(challenge))        │
//!        │  ticket = prefix ++ sign(SHA256(prefix)) │
//!        │                                          │
//!        │        2. ticket                         │
//!        ├─────────────────────────────────────────►│
//!        │                                          │
//!        │                  verify(ticket, challenge)
//! ```
//!
//! The server needs neither the password nor any stored key to check a
//! ticket. Mapping the embedded public key to an account, and making sure
//! a challenge is only accepted once, is up to the application.

pub mod builder;
pub mod codec;
pub mod verifier;

mod error;

pub use builder::{create_identity_ticket, create_identity_ticket_from_bytes, sign_identity_ticket};
pub use codec::{decode, encode_unsigned, DecodedTicket, IdentityTicket, TicketSummary};
pub use error::{TicketError, TicketRejection};
pub use verifier::{verify_identity_ticket, verify_identity_ticket_detailed};
