//! The transport capability the round driver is built against.
//!
//! Tree construction, membership, and the network carrying messages between parent and
//! child are external collaborators; this crate only states the contract they must
//! satisfy. [`crate::driver::SigningNode`] is generic over any implementor, so a real
//! networked transport and an in-memory one used for tests (see `cosig-testkit`) are
//! interchangeable.

use async_trait::async_trait;
use generic_ec::Curve;

use crate::{error::TransportError, messages::Message};

/// Parent/child message exchange for one node in the tree.
///
/// Failure of any method terminates the round at the node that observed it; the driver
/// never retries within a round.
#[async_trait]
pub trait Transport<E: Curve>: Send {
    /// Receive one message from the parent. Not called by the root.
    async fn get_up(&mut self) -> Result<Message<E>, TransportError>;

    /// Send one message to the parent. Not called by the root.
    async fn put_up(&mut self, msg: Message<E>) -> Result<(), TransportError>;

    /// Gather one message from each child; a barrier over all children at once.
    async fn get_down(&mut self) -> Result<Vec<Message<E>>, TransportError>;

    /// Deliver one message to each child. Both `Announcement` and `Challenge` broadcast
    /// the identical payload to every child, so the driver passes the same cloned message
    /// `n_children()` times rather than per-child content.
    async fn put_down(&mut self, msgs: Vec<Message<E>>) -> Result<(), TransportError>;

    /// Number of children of this node in the tree.
    fn n_children(&self) -> usize;

    /// Whether this node is the tree's root.
    fn is_root(&self) -> bool;

    /// Root-only: block until a new batch is ready to sign, yielding the message.
    async fn wait_tick(&mut self) -> Result<Vec<u8>, TransportError>;
}
