//! The signing protocol's tagged union of messages.
//!
//! The four message kinds are one enum rather than a dynamically-typed interface, so a
//! wrong variant arriving at a protocol slot is an explicit, returned
//! [`crate::error::ProtocolViolation`] instead of requiring a runtime downcast.

use generic_ec::{Curve, Point, Scalar};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Message<E: Curve> {
    Announcement(AnnouncementMessage),
    Commitment(CommitmentMessage<E>),
    Challenge(ChallengeMessage<E>),
    Response(ResponseMessage<E>),
}

/// Broadcast down the tree to start a round. Carries the message to sign (or an
/// identifier for it resolvable against the timestamping collaborator) so every node has
/// `m` without a side channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnouncementMessage {
    pub message: Vec<u8>,
}

/// Sent up the tree once a node and all its children have committed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CommitmentMessage<E: Curve> {
    /// This node's own commitment `V = v*B`.
    pub v: Point<E>,
    /// The partial aggregate commitment over this node's subtree.
    pub v_hat: Point<E>,
}

/// Broadcast down the tree once the root has derived the round's challenge.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ChallengeMessage<E: Curve> {
    pub c: Scalar<E>,
}

/// Sent up the tree once a node and all its children have responded.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ResponseMessage<E: Curve> {
    /// The partial aggregate response over this node's subtree.
    pub r_hat: Scalar<E>,
}
