//! Tree-structured collective Schnorr signing.
//!
//! A signing tree computes one Schnorr signature `(c, r_hat)` over a shared aggregate
//! public key `X_hat`, with each node performing O(children) work instead of the root
//! doing O(n). Four phases, each a pass over the tree: Announce (down), Commit (up),
//! Challenge (down), Respond (up). This crate implements [`driver::SigningNode`] and the
//! types it's built from. Tree construction and the network moving messages between
//! parent and child are external collaborators behind [`transport::Transport`] —
//! `cosig-testkit` provides an in-memory one for tests, `cosig-wire` a wire codec for a
//! real one.

pub mod aggregator;
pub mod config;
pub mod driver;
pub mod error;
pub mod hash;
pub mod keys;
pub mod messages;
pub mod round;
pub mod transport;
pub mod verifier;

pub use config::NodeConfig;
pub use driver::SigningNode;
pub use error::{NodeError, ProtocolViolation, TransportError, VerificationFailed};
pub use keys::KeyPair;
pub use messages::Message;
pub use round::{RoundContext, RoundState};
pub use transport::Transport;
