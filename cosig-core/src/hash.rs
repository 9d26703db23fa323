//! The hash-to-scalar binder `H(message, point) -> scalar`.
//!
//! Used twice: once by the root in `finalize_commits` to derive the round's challenge,
//! and once by every node's verifier to re-derive it against the aggregated response
//! (the root additionally checks the re-derivation matches the challenge it emitted).
//! Implemented once so those two call sites can never quietly disagree on the encoding.

use digest::Digest;
use generic_ec::{hash_to_curve::FromHash, Curve, Point, Scalar};

#[derive(udigest::Digestable)]
#[udigest(tag = "cosig.schnorr.challenge.v1")]
#[udigest(bound = "")]
struct ChallengeInput<'a, E: Curve> {
    #[udigest(as_bytes)]
    message: &'a [u8],
    commitment: &'a Point<E>,
}

/// `H(message, point) -> scalar`, domain-separated from any other hash this crate (or a
/// caller embedding it) might derive from the same curve.
pub fn hash_challenge<E, D>(message: &[u8], commitment: &Point<E>) -> Scalar<E>
where
    E: Curve,
    Scalar<E>: FromHash,
    D: Digest + Clone + 'static,
{
    Scalar::<E>::from_hash::<D>(&ChallengeInput { message, commitment })
}
