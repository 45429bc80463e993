// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # KeyTicket Protocol: Core Library
//!
//! Passwordless login without a key store. A client turns a name and a
//! password into an Ed25519 keypair (SHA-256, then PBKDF2-HMAC-SHA256),
//! signs the server's challenge with it, and ships the result as a compact
//! binary identity ticket. Anyone holding the ticket and the challenge can
//! verify it; the password and the private key never leave the client.
//!
//! ## Architecture
//!
//! - **config**: Protocol constants. Both ends must agree on all of them.
//! - **crypto**: SHA-256, PBKDF2 and Ed25519 wrappers. Don't roll your own.
//! - **identity**: Keypair derivation and challenge solving.
//! - **ticket**: Binary codec, ticket builder and verifier.
//!
//! ## Quick start
//!
//! ```
//! use keyticket_protocol::identity::generate_random_challenge;
//! use keyticket_protocol::ticket::{create_identity_ticket, verify_identity_ticket};
//!
//! let challenge = generate_random_challenge(32);
//! let ticket = create_identity_ticket("alice", "correct horse battery staple", &challenge);
//! assert!(verify_identity_ticket(ticket.as_bytes(), &challenge));
//! ```
//!
//! ## Ground rules
//!
//! 1. Every function is synchronous and pure. Call them from as many
//!    threads as you like.
//! 2. Verification never panics and never errors. It answers yes or no.
//! 3. Key material is never logged and never outlives the call that
//!    derived it.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod ticket;

pub use identity::{derive_keypair, generate_random_challenge, solve_challenge};
pub use ticket::{
    create_identity_ticket, verify_identity_ticket, DecodedTicket, IdentityTicket, TicketError,
};
