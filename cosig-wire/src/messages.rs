//! The timestamping RPC's sub-message catalogue.
//!
//! `HashId` and `MerkleProof` are opaque payload types here: owned and interpreted by the
//! Merkle-accumulator collaborator this codec rides on top of, this crate only needs them
//! to round-trip.

use serde::{Deserialize, Serialize};

/// Output width of the timestamping service's hash function.
pub type HashId = [u8; 32];

/// An ordered list of sibling hashes plus a left/right path, sufficient for the
/// accumulator collaborator to recompute a Merkle root; opaque to this codec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub siblings: Vec<HashId>,
    /// `true` at index `i` if `siblings[i]` is the right sibling at that level.
    pub is_right: Vec<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampRequest {
    pub val: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampReply {
    pub sig: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    pub root: HashId,
    pub time: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEntry {
    pub entry: Vec<u8>,
    pub sig: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRequest {
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryReply {
    pub log: SignedEntry,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRequest {
    pub old: u64,
    pub new: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofReply {
    pub proof: MerkleProof,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub msg: String,
}
