//! Error kinds surfaced by the round driver, aggregator and verifier.
//!
//! None of these are meant to unwind out of [`crate::driver::SigningNode::listen`]: the
//! driver logs them and returns the node to `Idle`, per the protocol's error handling design.

use thiserror::Error;

/// A failed send, gather or tick wait on the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("receive from parent failed: {0}")]
    Receive(String),
    #[error("send to parent failed: {0}")]
    Send(String),
    #[error("gather from children failed: {0}")]
    Gather(String),
    #[error("broadcast to children failed: {0}")]
    Broadcast(String),
    #[error("wait for external tick failed: {0}")]
    Tick(String),
}

/// A message arrived at a protocol slot that doesn't accept its variant.
#[derive(Debug, Error)]
pub enum ProtocolViolation {
    #[error("expected {expected} from parent, got a different message variant")]
    UnexpectedVariant { expected: &'static str },
    #[error("child {index} replied with wrong message variant, expected {expected}")]
    UnexpectedChildVariant { index: usize, expected: &'static str },
}

/// The Schnorr identity or the root's challenge binding did not hold.
#[derive(Debug, Error)]
pub enum VerificationFailed {
    #[error("node {node}: r_hat*B + c*X_hat != V_hat")]
    SchnorrIdentity { node: String },
    #[error("node {node}: root challenge binding c != H(m, V_hat) failed")]
    ChallengeBinding { node: String },
}

/// Unexpected error in the round driver's own state machine, not caused by a peer or the
/// transport. These indicate a phase transition ran out of order; every `run_round` path
/// is written so they're unreachable in practice, but they're returned rather than
/// panicked on so a bug here can't take down the hosting process.
#[derive(Debug, Error)]
pub enum Bug {
    #[error("round context missing at {0}: commit must run before this phase")]
    RoundContextMissing(&'static str),
    #[error("challenge missing from round context at {0}: challenge must run before this phase")]
    ChallengeMissing(&'static str),
    #[error("aggregated response missing from round context at {0}: respond must run before this phase")]
    ResponseMissing(&'static str),
}

/// Error surfaced by the round driver for a single round at a single node.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
    #[error(transparent)]
    Verification(#[from] VerificationFailed),
    #[error(transparent)]
    Internal(#[from] Bug),
}
