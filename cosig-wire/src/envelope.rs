//! The envelope: one discriminator byte, then a bincode-encoded sub-message.
//!
//! `MessageType` fixes the discriminator values so they're stable across versions of this
//! crate; `Envelope` is the tagged union dispatched on it.

use serde::{Deserialize, Serialize};

use crate::{
    error::{DecodeError, EncodeError},
    messages::{
        EntryReply, EntryRequest, ErrorReply, ProofReply, ProofRequest, StampReply, StampRequest,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    Error = 0,
    StampRequest = 1,
    StampReply = 2,
    EntryRequest = 3,
    EntryReply = 4,
    ProofRequest = 5,
    ProofReply = 6,
}

impl MessageType {
    fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            0 => Self::Error,
            1 => Self::StampRequest,
            2 => Self::StampReply,
            3 => Self::EntryRequest,
            4 => Self::EntryReply,
            5 => Self::ProofRequest,
            6 => Self::ProofReply,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Envelope {
    Error(ErrorReply),
    StampRequest(StampRequest),
    StampReply(StampReply),
    EntryRequest(EntryRequest),
    EntryReply(EntryReply),
    ProofRequest(ProofRequest),
    ProofReply(ProofReply),
}

impl Envelope {
    fn message_type(&self) -> MessageType {
        match self {
            Self::Error(_) => MessageType::Error,
            Self::StampRequest(_) => MessageType::StampRequest,
            Self::StampReply(_) => MessageType::StampReply,
            Self::EntryRequest(_) => MessageType::EntryRequest,
            Self::EntryReply(_) => MessageType::EntryReply,
            Self::ProofRequest(_) => MessageType::ProofRequest,
            Self::ProofReply(_) => MessageType::ProofReply,
        }
    }

}

/// Encodes `env` as `[discriminator byte][bincode payload]`.
pub fn encode(env: &Envelope) -> Result<Vec<u8>, EncodeError> {
    let mut out = vec![env.message_type() as u8];
    let payload = match env {
        Envelope::Error(m) => bincode::serialize(m),
        Envelope::StampRequest(m) => bincode::serialize(m),
        Envelope::StampReply(m) => bincode::serialize(m),
        Envelope::EntryRequest(m) => bincode::serialize(m),
        Envelope::EntryReply(m) => bincode::serialize(m),
        Envelope::ProofRequest(m) => bincode::serialize(m),
        Envelope::ProofReply(m) => bincode::serialize(m),
    }
    .map_err(|e| EncodeError::Payload(e.to_string()))?;
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decodes `bytes` produced by [`encode`]. Fails on an empty buffer, an unrecognized
/// leading byte, or a payload that doesn't deserialize as the discriminated type.
pub fn decode(bytes: &[u8]) -> Result<Envelope, DecodeError> {
    let (&tag, payload) = bytes.split_first().ok_or(DecodeError::Empty)?;
    let ty = MessageType::from_byte(tag).ok_or(DecodeError::UnknownDiscriminator(tag))?;

    fn deser<'a, T: Deserialize<'a>>(variant: &'static str, payload: &'a [u8]) -> Result<T, DecodeError> {
        bincode::deserialize(payload).map_err(|e| DecodeError::Payload { variant, source: e.to_string() })
    }

    Ok(match ty {
        MessageType::Error => Envelope::Error(deser("Error", payload)?),
        MessageType::StampRequest => Envelope::StampRequest(deser("StampRequest", payload)?),
        MessageType::StampReply => Envelope::StampReply(deser("StampReply", payload)?),
        MessageType::EntryRequest => Envelope::EntryRequest(deser("EntryRequest", payload)?),
        MessageType::EntryReply => Envelope::EntryReply(deser("EntryReply", payload)?),
        MessageType::ProofRequest => Envelope::ProofRequest(deser("ProofRequest", payload)?),
        MessageType::ProofReply => Envelope::ProofReply(deser("ProofReply", payload)?),
    })
}
