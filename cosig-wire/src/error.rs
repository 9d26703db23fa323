//! Codec-level errors. Distinct from `cosig-core`'s `TransportError` / `ProtocolViolation`:
//! those are round-driver concerns, these are "the bytes on the wire didn't decode".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode sub-message: {0}")]
    Payload(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("envelope is empty, expected a leading MessageType byte")]
    Empty,
    #[error("unknown MessageType discriminator: {0:#04x}")]
    UnknownDiscriminator(u8),
    #[error("failed to decode sub-message for {variant}: {source}")]
    Payload {
        variant: &'static str,
        source: String,
    },
}
