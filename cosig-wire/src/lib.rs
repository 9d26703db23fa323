//! Wire codec for the timestamping RPC that rides on top of the collective signing core.
//!
//! An RPC message is one discriminator byte followed by a self-describing encoding of its
//! single populated sub-message (see [`envelope`]). The sub-messages themselves
//! ([`messages`]) are plain data: `HashId` and `MerkleProof` are opaque payloads owned by
//! whatever Merkle-accumulator collaborator sits behind this RPC, not interpreted here.

pub mod envelope;
pub mod error;
pub mod messages;

pub use envelope::{decode, encode, Envelope, MessageType};
pub use error::{DecodeError, EncodeError};
pub use messages::{
    EntryReply, EntryRequest, ErrorReply, HashId, LogEntry, MerkleProof, ProofReply,
    ProofRequest, SignedEntry, StampReply, StampRequest,
};
