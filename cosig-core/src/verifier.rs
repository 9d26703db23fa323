//! Checks the Schnorr identity at every node, and the challenge binding at the root.
//!
//! Every node verifies, not just the root: intermediate verification localizes the
//! subtree responsible for a failure (only the subtrees whose partial check succeeds can
//! be trusted; the shallowest failing node roots the faulty subtree). This is the
//! protocol's primary diagnostic mechanism, which is why both outcomes are logged with
//! the node's identity rather than only bubbled up as a return value.

use digest::Digest;
use generic_ec::{hash_to_curve::FromHash, Curve, Point, Scalar};

use crate::{
    error::{Bug, NodeError, VerificationFailed},
    hash::hash_challenge,
    round::RoundContext,
};

/// Recomputes `T = r_hat*B + c*X_hat` and requires `T = V_hat`. At the root, additionally
/// recomputes `c' = H(m, T)` and requires `c' = c`.
pub fn verify_responses<E, D>(
    node: &str,
    ctx: &RoundContext<E>,
    x_hat: &Point<E>,
    is_root: bool,
) -> Result<(), NodeError>
where
    E: Curve,
    Scalar<E>: FromHash,
    D: Digest + Clone + 'static,
{
    let c = ctx.c.ok_or(Bug::ChallengeMissing("verify_responses"))?;
    let r_hat = ctx.r_hat.ok_or(Bug::ResponseMissing("verify_responses"))?;

    let t = Point::<E>::generator() * r_hat + *x_hat * c;
    if t != ctx.v_hat {
        tracing::error!(node, "Schnorr identity check failed");
        return Err(VerificationFailed::SchnorrIdentity { node: node.to_owned() }.into());
    }

    if is_root {
        let c2 = hash_challenge::<E, D>(&ctx.message, &t);
        if c2 != c {
            tracing::error!(node, "root challenge binding check failed");
            return Err(VerificationFailed::ChallengeBinding { node: node.to_owned() }.into());
        }
    }

    tracing::info!(node, is_root, "verification succeeded");
    Ok(())
}
