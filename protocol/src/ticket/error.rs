//! Error types for ticket encoding, building and verification.

use thiserror::Error;

use crate::crypto::keys::KeyError;

/// Errors raised by the ticket codec and the raw-byte ticket entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    /// The buffer is shorter than its `nameLength` prefix requires.
    #[error("malformed ticket: expected {expected} bytes, got {actual}")]
    MalformedTicket {
        /// Length implied by the name-length prefix (or the minimum ticket
        /// length if the prefix itself is missing).
        expected: usize,
        /// Length of the buffer we were handed.
        actual: usize,
    },

    /// A hash, KDF or Ed25519 primitive rejected its input.
    #[error("crypto primitive failure: {0}")]
    CryptoPrimitiveFailure(String),

    /// A textual ticket representation could not be decoded to bytes.
    #[error("invalid ticket encoding: {0}")]
    InvalidEncoding(String),
}

impl From<KeyError> for TicketError {
    fn from(e: KeyError) -> Self {
        TicketError::CryptoPrimitiveFailure(e.to_string())
    }
}

impl From<hex::FromHexError> for TicketError {
    fn from(e: hex::FromHexError) -> Self {
        TicketError::InvalidEncoding(e.to_string())
    }
}

/// Why a ticket failed verification.
///
/// Only the detailed verifier surfaces this; the boolean verifier folds
/// every variant into `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketRejection {
    /// The ticket could not be decoded.
    #[error("ticket is malformed: {0}")]
    Malformed(#[from] TicketError),

    /// The embedded public key is not a valid Ed25519 point.
    #[error("ticket public key is not a valid Ed25519 key")]
    InvalidPublicKey,

    /// The ticket's own signature does not cover its contents.
    #[error("ticket signature does not match its contents")]
    BadTicketSignature,

    /// The challenge answer does not sign the supplied challenge.
    #[error("challenge answer does not match the challenge")]
    BadChallengeAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_maps_to_crypto_failure() {
        let err: TicketError = KeyError::InvalidSecretKey.into();
        assert!(matches!(err, TicketError::CryptoPrimitiveFailure(_)));
    }

    #[test]
    fn test_key_error_message_is_carried() {
        let err: TicketError = KeyError::InvalidSecretKey.into();
        assert_eq!(
            err,
            TicketError::CryptoPrimitiveFailure(
                "invalid secret key bytes: expected 32 bytes".to_string()
            )
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = TicketError::MalformedTicket {
            expected: 167,
            actual: 12,
        };
        assert_eq!(err.to_string(), "malformed ticket: expected 167 bytes, got 12");
    }

    #[test]
    fn test_rejection_from_ticket_error() {
        let rejection: TicketRejection = TicketError::MalformedTicket {
            expected: 162,
            actual: 0,
        }
        .into();
        assert!(matches!(rejection, TicketRejection::Malformed(_)));
    }
}
