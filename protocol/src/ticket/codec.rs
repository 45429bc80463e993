//! Binary ticket layout.
//!
//! ```text
//! offset            size  field
//! 0                 2     nameLength (u16, little-endian)
//! 2                 n     name (UTF-8, n = nameLength)
//! 2+n               32    publicKey
//! 34+n              64    challengeAnswer
//! 98+n              64    signature over SHA256(bytes[0 .. 98+n])
//! ```
//!
//! No padding, no version tag. Decoding only checks structure; whether the
//! key and signatures mean anything is the verifier's problem.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::error::TicketError;
use crate::config::{
    ticket_length, NAME_LENGTH_PREFIX, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, TICKET_OVERHEAD,
    UNSIGNED_OVERHEAD,
};
use crate::crypto::hash::{sha256_multi, Digest256};
use crate::crypto::kdf::truncate_name;
use crate::crypto::keys::{IdentityPublicKey, IdentitySignature};
use crate::identity::ChallengeAnswer;

/// Encode the unsigned prefix: `nameLength ++ name ++ publicKey ++ challengeAnswer`.
///
/// Names longer than 65535 bytes are truncated, exactly as key derivation
/// truncates them.
pub fn encode_unsigned(
    name: &[u8],
    public_key: &IdentityPublicKey,
    challenge_answer: &ChallengeAnswer,
) -> Vec<u8> {
    let name = truncate_name(name);
    // truncate_name bounds the length to u16::MAX.
    let name_length = name.len() as u16;

    let mut out = Vec::with_capacity(ticket_length(name.len()));
    out.extend_from_slice(&name_length.to_le_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(public_key.as_bytes());
    out.extend_from_slice(challenge_answer.as_bytes());
    out
}

/// Decode a ticket into its fields.
///
/// Fails with [`TicketError::MalformedTicket`] if the buffer is shorter than
/// `nameLength + 162` bytes. Anything past that length is ignored.
pub fn decode(ticket: &[u8]) -> Result<DecodedTicket, TicketError> {
    let Some(prefix) = ticket.get(..NAME_LENGTH_PREFIX) else {
        return Err(TicketError::MalformedTicket {
            expected: TICKET_OVERHEAD,
            actual: ticket.len(),
        });
    };
    let name_length = u16::from_le_bytes([prefix[0], prefix[1]]) as usize;
    let expected = ticket_length(name_length);
    let malformed = || TicketError::MalformedTicket {
        expected,
        actual: ticket.len(),
    };
    let Some(ticket) = ticket.get(NAME_LENGTH_PREFIX..expected) else {
        return Err(malformed());
    };

    let (name, rest) = ticket.split_at(name_length);
    let (public_key, rest) = rest.split_at(PUBLIC_KEY_LENGTH);
    let (challenge_answer, signature) = rest.split_at(SIGNATURE_LENGTH);

    Ok(DecodedTicket {
        name: name.to_vec(),
        public_key: IdentityPublicKey::from_bytes(
            public_key.try_into().map_err(|_| malformed())?,
        ),
        challenge_answer: IdentitySignature::try_from_slice(challenge_answer)
            .map_err(|_| malformed())?,
        signature: IdentitySignature::try_from_slice(signature).map_err(|_| malformed())?,
    })
}

/// The fields of a decoded ticket.
///
/// Decoding copies the fields out of the caller's buffer; nothing here can
/// change the ticket it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTicket {
    name: Vec<u8>,
    public_key: IdentityPublicKey,
    challenge_answer: ChallengeAnswer,
    signature: IdentitySignature,
}

impl DecodedTicket {
    /// Assemble a ticket from its parts. The name is truncated to 65535 bytes.
    pub fn from_parts(
        name: &[u8],
        public_key: IdentityPublicKey,
        challenge_answer: ChallengeAnswer,
        signature: IdentitySignature,
    ) -> Self {
        Self {
            name: truncate_name(name).to_vec(),
            public_key,
            challenge_answer,
            signature,
        }
    }

    /// The `nameLength` field.
    pub fn name_length(&self) -> u16 {
        // Bounded by decode / from_parts.
        self.name.len() as u16
    }

    /// The raw name bytes.
    pub fn name_bytes(&self) -> &[u8] {
        &self.name
    }

    /// The name as text. Invalid UTF-8 (e.g. a character cut in half by
    /// truncation) is replaced with U+FFFD.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn public_key(&self) -> &IdentityPublicKey {
        &self.public_key
    }

    pub fn challenge_answer(&self) -> &ChallengeAnswer {
        &self.challenge_answer
    }

    pub fn signature(&self) -> &IdentitySignature {
        &self.signature
    }

    /// Re-encode the unsigned prefix from the decoded fields.
    pub fn unsigned_prefix(&self) -> Vec<u8> {
        encode_unsigned(&self.name, &self.public_key, &self.challenge_answer)
    }

    /// SHA-256 of the unsigned prefix, hashed straight from the fields.
    pub fn unsigned_digest(&self) -> Digest256 {
        sha256_multi(&[
            &self.name_length().to_le_bytes(),
            &self.name,
            self.public_key.as_bytes(),
            self.challenge_answer.as_bytes(),
        ])
    }

    /// Length of the full encoded ticket.
    pub fn encoded_len(&self) -> usize {
        ticket_length(self.name.len())
    }

    /// Encode the full ticket, signature included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.unsigned_prefix();
        out.extend_from_slice(self.signature.as_bytes());
        out
    }

    /// A serializable, hex-encoded view of the ticket.
    pub fn summary(&self) -> TicketSummary {
        TicketSummary {
            name: self.name().into_owned(),
            name_length: self.name_length(),
            public_key: self.public_key.to_hex(),
            challenge_answer: self.challenge_answer.to_hex(),
            signature: self.signature.to_hex(),
            length: self.encoded_len(),
        }
    }
}

/// An encoded identity ticket.
///
/// Construction guarantees the bytes are structurally well formed; it says
/// nothing about whether the ticket verifies.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityTicket {
    bytes: Vec<u8>,
}

impl IdentityTicket {
    /// Wrap an encoded ticket after checking its structure.
    ///
    /// Stricter than [`decode`]: the buffer must be exactly one ticket, with
    /// no trailing bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TicketError> {
        let decoded = decode(&bytes)?;
        if bytes.len() != decoded.encoded_len() {
            return Err(TicketError::MalformedTicket {
                expected: decoded.encoded_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Parse a hex-encoded ticket.
    pub fn from_hex(s: &str) -> Result<Self, TicketError> {
        Self::from_bytes(hex::decode(s.trim())?)
    }

    pub(crate) fn from_encoded(bytes: Vec<u8>) -> Self {
        debug_assert!(decode(&bytes).is_ok());
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even an empty name leaves 162 bytes of ticket.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Decode the ticket's fields.
    pub fn decode(&self) -> Result<DecodedTicket, TicketError> {
        decode(&self.bytes)
    }
}

impl AsRef<[u8]> for IdentityTicket {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for IdentityTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityTicket({} bytes)", self.bytes.len())
    }
}

/// JSON-friendly view of a decoded ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub name: String,
    pub name_length: u16,
    pub public_key: String,
    pub challenge_answer: String,
    pub signature: String,
    pub length: usize,
}

// Every byte after the name is fixed-width; keep the constants honest.
const _: () = assert!(UNSIGNED_OVERHEAD == NAME_LENGTH_PREFIX + PUBLIC_KEY_LENGTH + SIGNATURE_LENGTH);
