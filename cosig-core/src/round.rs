//! Per-round scratch state.
//!
//! `v, V, V_hat, c, r, r_hat` are grouped into one value instead of living as long-term
//! fields on the node itself, so round-scoped secrets stay isolated from the node's
//! long-term identity and there's an obvious place to hang a round tag if pipelining is
//! ever added. The driver creates one fresh in `commit` and drops it once the round ends
//! or aborts.

use generic_ec::{Curve, Point, Scalar, SecretScalar};

pub struct RoundContext<E: Curve> {
    /// This node's secret nonce for the round.
    pub v: SecretScalar<E>,
    /// `v * B`.
    pub v_point: Point<E>,
    /// Partial aggregate commitment over this node's subtree.
    pub v_hat: Point<E>,
    /// The round's challenge, set once the root's `finalize_commits` (or this node's
    /// `challenge` handler) runs.
    pub c: Option<Scalar<E>>,
    /// This node's own response, set in `respond`.
    pub r: Option<Scalar<E>>,
    /// Partial aggregate response over this node's subtree, set in `respond`.
    pub r_hat: Option<Scalar<E>>,
    /// The message being signed this round, carried down from the root's announcement.
    pub message: Vec<u8>,
}

/// The driver's position in the four-phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Announced,
    Committed,
    Challenged,
    Responded,
}
