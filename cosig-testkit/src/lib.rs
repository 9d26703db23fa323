//! In-memory tree transport and key-material fixtures, so `cosig-core`'s round driver can
//! be exercised without a real network.
//!
//! [`TreeTopology`] describes a tree's children-of shape; [`build_tree`] turns a topology
//! into one [`InMemoryTransport`] per node plus the key material (`cosig-core::KeyPair`
//! and partial aggregate public keys) a test needs to drive `SigningNode::listen` at
//! every node and check the signature it produces.

use async_trait::async_trait;
use cosig_core::{
    aggregator::aggregate_key,
    error::TransportError,
    keys::KeyPair,
    messages::Message,
    transport::Transport,
};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use generic_ec::{Curve, Point};
use rand_core::{CryptoRng, RngCore};

/// A tree shape, expressed as each node's children by index. Node `0` is always the root.
pub struct TreeTopology {
    pub children: Vec<Vec<usize>>,
}

impl TreeTopology {
    /// `A -> B -> C -> ...`: node `0` is the root, each subsequent node is the prior
    /// node's sole child.
    pub fn chain(len: usize) -> Self {
        assert!(len >= 1, "a chain needs at least one node");
        let children = (0..len)
            .map(|i| if i + 1 < len { vec![i + 1] } else { vec![] })
            .collect();
        Self { children }
    }

    /// One root with `fanout` leaf children.
    pub fn star(fanout: usize) -> Self {
        let mut children = vec![(1..=fanout).collect()];
        children.extend(std::iter::repeat(Vec::new()).take(fanout));
        Self { children }
    }

    /// A single node with no children.
    pub fn single() -> Self {
        Self { children: vec![vec![]] }
    }

    fn len(&self) -> usize {
        self.children.len()
    }

    fn parent_of(&self, node: usize) -> Option<usize> {
        self.children.iter().position(|kids| kids.contains(&node))
    }
}

/// An in-memory [`Transport`] backed by `futures` mpsc channels: one channel parent-to-
/// child (Announcement/Challenge) and one child-to-parent (Commitment/Response) per tree
/// edge. The root additionally owns a channel standing in for the external tick source,
/// fed by [`TickSource::fire`].
pub struct InMemoryTransport<E: Curve> {
    is_root: bool,
    n_children: usize,
    up_tx: Option<UnboundedSender<Message<E>>>,
    up_rx: Option<UnboundedReceiver<Message<E>>>,
    down_tx: Vec<UnboundedSender<Message<E>>>,
    down_rx: Vec<UnboundedReceiver<Message<E>>>,
    tick_rx: Option<UnboundedReceiver<Vec<u8>>>,
}

#[async_trait]
impl<E: Curve> Transport<E> for InMemoryTransport<E> {
    async fn get_up(&mut self) -> Result<Message<E>, TransportError> {
        self.up_rx
            .as_mut()
            .expect("non-root transport has an up channel")
            .next()
            .await
            .ok_or_else(|| TransportError::Receive("parent channel closed".into()))
    }

    async fn put_up(&mut self, msg: Message<E>) -> Result<(), TransportError> {
        self.up_tx
            .as_ref()
            .expect("non-root transport has an up channel")
            .unbounded_send(msg)
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    async fn get_down(&mut self) -> Result<Vec<Message<E>>, TransportError> {
        let mut out = Vec::with_capacity(self.down_rx.len());
        for rx in &mut self.down_rx {
            let msg = rx
                .next()
                .await
                .ok_or_else(|| TransportError::Gather("child channel closed".into()))?;
            out.push(msg);
        }
        Ok(out)
    }

    async fn put_down(&mut self, msgs: Vec<Message<E>>) -> Result<(), TransportError> {
        if msgs.len() != self.down_tx.len() {
            return Err(TransportError::Broadcast(format!(
                "expected {} messages, got {}",
                self.down_tx.len(),
                msgs.len()
            )));
        }
        for (tx, msg) in self.down_tx.iter().zip(msgs) {
            tx.unbounded_send(msg).map_err(|e| TransportError::Broadcast(e.to_string()))?;
        }
        Ok(())
    }

    fn n_children(&self) -> usize {
        self.n_children
    }

    fn is_root(&self) -> bool {
        self.is_root
    }

    async fn wait_tick(&mut self) -> Result<Vec<u8>, TransportError> {
        self.tick_rx
            .as_mut()
            .expect("only the root's transport has a tick channel")
            .next()
            .await
            .ok_or_else(|| TransportError::Tick("tick source closed".into()))
    }
}

/// Handle used by a test to drive the root's tick.
pub struct TickSource<E> {
    tx: UnboundedSender<Vec<u8>>,
    _marker: std::marker::PhantomData<E>,
}

impl<E> TickSource<E> {
    pub fn fire(&self, message: Vec<u8>) {
        self.tx
            .unbounded_send(message)
            .expect("tick channel only closes when TickSource is dropped");
    }
}

/// All the wiring and key material for one tree: one transport per node (index-aligned
/// with `topology`), the tick source for the root, and each node's key pair and partial
/// aggregate public key.
pub struct Tree<E: Curve> {
    pub transports: Vec<InMemoryTransport<E>>,
    pub tick: TickSource<E>,
    pub keys: Vec<KeyPair<E>>,
    /// `x_hat[i]` is the partial aggregate public key over the subtree rooted at node `i`.
    pub x_hat: Vec<Point<E>>,
}

/// Generates one key pair per node, wires up channels per `topology`, and computes every
/// node's partial aggregate public key bottom-up.
pub fn build_tree<E: Curve, R: RngCore + CryptoRng>(topology: &TreeTopology, rng: &mut R) -> Tree<E> {
    let n = topology.len();
    let keys: Vec<KeyPair<E>> = (0..n).map(|_| KeyPair::generate(rng)).collect();

    let mut up_tx: Vec<Option<UnboundedSender<Message<E>>>> = (0..n).map(|_| None).collect();
    let mut up_rx: Vec<Option<UnboundedReceiver<Message<E>>>> = (0..n).map(|_| None).collect();
    let mut down_tx: Vec<Vec<UnboundedSender<Message<E>>>> = (0..n).map(|_| Vec::new()).collect();
    let mut down_rx: Vec<Vec<UnboundedReceiver<Message<E>>>> = (0..n).map(|_| Vec::new()).collect();

    for (parent, kids) in topology.children.iter().enumerate() {
        for &child in kids {
            // Parent -> child: carries Announcement/Challenge. The child reads it with
            // get_up; the parent writes it with put_down.
            let (down_sender, down_receiver) = mpsc::unbounded();
            down_tx[parent].push(down_sender);
            up_rx[child] = Some(down_receiver);

            // Child -> parent: carries Commitment/Response. The child writes it with
            // put_up; the parent gathers it with get_down.
            let (up_sender, up_receiver) = mpsc::unbounded();
            up_tx[child] = Some(up_sender);
            down_rx[parent].push(up_receiver);
        }
    }

    let (tick_tx, tick_rx) = mpsc::unbounded();

    let transports = (0..n)
        .map(|i| {
            let is_root = topology.parent_of(i).is_none();
            InMemoryTransport {
                is_root,
                n_children: topology.children[i].len(),
                up_tx: up_tx[i].take(),
                up_rx: up_rx[i].take(),
                down_tx: std::mem::take(&mut down_tx[i]),
                down_rx: std::mem::take(&mut down_rx[i]),
                tick_rx: if is_root { Some(tick_rx) } else { None },
            }
        })
        .collect();

    let x_hat = compute_partial_keys(topology, &keys);
    let tick = TickSource { tx: tick_tx, _marker: std::marker::PhantomData };

    Tree { transports, tick, keys, x_hat }
}

fn compute_partial_keys<E: Curve>(topology: &TreeTopology, keys: &[KeyPair<E>]) -> Vec<Point<E>> {
    fn go<E: Curve>(topology: &TreeTopology, keys: &[KeyPair<E>], node: usize, out: &mut [Option<Point<E>>]) {
        for &child in &topology.children[node] {
            go(topology, keys, child, out);
        }
        let children_x_hat: Vec<Point<E>> = topology.children[node]
            .iter()
            .map(|&c| out[c].expect("children computed before their parent"))
            .collect();
        out[node] = Some(aggregate_key(keys[node].pub_key, children_x_hat));
    }

    let mut out: Vec<Option<Point<E>>> = (0..topology.len()).map(|_| None).collect();
    go(topology, keys, 0, &mut out);
    out.into_iter().map(|p| p.expect("every node visited")).collect()
}
