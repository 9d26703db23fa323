//! Pure group-sum functions. No transport, no I/O, no error cases: a missing child
//! message is a driver-level concern (`ProtocolViolation` / `TransportError`), not
//! something the aggregator itself needs to reason about.

use generic_ec::{Curve, Point, Scalar};

/// `V_hat = own_V + sum(children V_hat)`.
pub fn aggregate_commitments<E: Curve>(
    own_v: Point<E>,
    children_v_hat: impl IntoIterator<Item = Point<E>>,
) -> Point<E> {
    children_v_hat.into_iter().fold(own_v, |acc, v_hat| acc + v_hat)
}

/// `r_hat = own_r + sum(children r_hat)`.
pub fn aggregate_responses<E: Curve>(
    own_r: Scalar<E>,
    children_r_hat: impl IntoIterator<Item = Scalar<E>>,
) -> Scalar<E> {
    children_r_hat.into_iter().fold(own_r, |acc, r_hat| acc + r_hat)
}

/// `X_hat = own_pub + sum(children X_hat)`.
///
/// Invoked once per tree topology by the external tree collaborator (or a test harness
/// standing in for it); the signing core only ever consumes the result read-only.
pub fn aggregate_key<E: Curve>(
    own_pub: Point<E>,
    children_x_hat: impl IntoIterator<Item = Point<E>>,
) -> Point<E> {
    children_x_hat.into_iter().fold(own_pub, |acc, x_hat| acc + x_hat)
}
