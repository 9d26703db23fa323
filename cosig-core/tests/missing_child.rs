//! A child's transport fails the gather. The round
//! aborts at that node with `TransportError`; no signature is produced; a fresh `listen`
//! loop iteration would return the node to `Idle`.

use async_trait::async_trait;
use cosig_core::{error::TransportError, messages::Message, transport::Transport, SigningNode};
use cosig_testkit::{build_tree, TreeTopology};
use generic_ec::curves::Secp256k1;
use rand::rngs::OsRng;

type E = Secp256k1;

/// Fails every `get_down` call, simulating a child that never shows up to the gather.
struct DeadGather<T> {
    inner: T,
}

#[async_trait]
impl<T: Transport<E> + Send> Transport<E> for DeadGather<T> {
    async fn get_up(&mut self) -> Result<Message<E>, TransportError> {
        self.inner.get_up().await
    }

    async fn put_up(&mut self, msg: Message<E>) -> Result<(), TransportError> {
        self.inner.put_up(msg).await
    }

    async fn get_down(&mut self) -> Result<Vec<Message<E>>, TransportError> {
        Err(TransportError::Gather("child never responded".into()))
    }

    async fn put_down(&mut self, msgs: Vec<Message<E>>) -> Result<(), TransportError> {
        self.inner.put_down(msgs).await
    }

    fn n_children(&self) -> usize {
        self.inner.n_children()
    }

    fn is_root(&self) -> bool {
        self.inner.is_root()
    }

    async fn wait_tick(&mut self) -> Result<Vec<u8>, TransportError> {
        self.inner.wait_tick().await
    }
}

#[test]
fn missing_child_commitment_aborts_the_round_at_the_parent() {
    let mut rng = OsRng;
    let tree = build_tree::<E, _>(&TreeTopology::star(2), &mut rng);

    let mut root: SigningNode<E> = SigningNode::new("node-0", tree.keys[0].clone(), tree.x_hat[0]);
    let mut transports = tree.transports.into_iter();
    let mut root_transport = DeadGather { inner: transports.next().expect("star has a root") };

    // DeadGather fails unconditionally, so the two leaf children never need to run for
    // this scenario: the gather fails before the root would even finish sending them
    // anything to respond to.
    drop(transports);

    tree.tick.fire(b"missing child".to_vec());

    let outcome = futures::executor::block_on(root.run_round(&mut root_transport, &mut OsRng));

    assert!(
        matches!(outcome, Err(cosig_core::error::NodeError::Transport(_))),
        "root should abort the round with a TransportError, got {outcome:?}"
    );
    // The gather that fails is the commit-phase one, before a RoundContext is ever
    // recorded, so the node is left exactly where `announce` left it: no signature
    // produced, nothing for a subsequent round to inherit.
    assert!(
        root.round_context().is_none(),
        "no round context should have been recorded for an aborted commit phase"
    );
}
