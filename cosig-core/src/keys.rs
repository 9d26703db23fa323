//! Node identity and long-term key material.

use generic_ec::{Curve, Point, SecretScalar};
use rand_core::{CryptoRng, RngCore};

/// A node's long-term signing key pair.
///
/// Created once at node init and held for the node's lifetime. Not round-scoped —
/// contrast with [`crate::round::RoundContext`], which holds the per-round nonce.
#[derive(Clone)]
pub struct KeyPair<E: Curve> {
    pub priv_key: SecretScalar<E>,
    pub pub_key: Point<E>,
}

impl<E: Curve> KeyPair<E> {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let priv_key = SecretScalar::<E>::random(rng);
        let pub_key = Point::generator() * &priv_key;
        Self { priv_key, pub_key }
    }
}
