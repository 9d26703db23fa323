//! Boundary cases: a single-node tree (root is a leaf) and a two-node
//! tree (root + one child).

use cosig_core::SigningNode;
use cosig_testkit::{build_tree, TreeTopology};
use generic_ec::curves::Secp256k1;
use generic_ec::Point;
use rand::rngs::OsRng;

type E = Secp256k1;

/// A single-node tree produces a valid signature equivalent to a one-party Schnorr sign:
/// `V_hat = V_root`, `X_hat = X_root`, and the usual identity holds.
#[test]
fn single_node_tree_signs_like_a_solo_schnorr() {
    let mut rng = OsRng;
    let tree = build_tree::<E, _>(&TreeTopology::single(), &mut rng);

    let mut root = SigningNode::<E>::new("solo", tree.keys[0].clone(), tree.x_hat[0]);
    let mut transport = tree.transports.into_iter().next().unwrap();

    tree.tick.fire(b"solo round".to_vec());
    futures::executor::block_on(root.run_round(&mut transport, &mut OsRng)).expect("solo round succeeds");

    let ctx = root.round_context().unwrap();
    assert_eq!(ctx.v_hat, ctx.v_point, "with no children, V_hat is exactly this node's own V");
    assert_eq!(*root.x_hat(), *root.pub_key(), "with no children, X_hat is exactly this node's own X");

    let lhs = Point::<E>::generator() * ctx.r_hat.unwrap() + *root.x_hat() * ctx.c.unwrap();
    assert_eq!(lhs, ctx.v_hat);
}

/// A two-node tree: `V_hat_root = V_root + V_child`, and verification holds at both nodes.
#[test]
fn two_node_tree_aggregates_both_commitments() {
    let mut rng = OsRng;
    let tree = build_tree::<E, _>(&TreeTopology::chain(2), &mut rng);

    let mut root = SigningNode::<E>::new("root", tree.keys[0].clone(), tree.x_hat[0]);
    let mut child = SigningNode::<E>::new("child", tree.keys[1].clone(), tree.x_hat[1]);
    let mut transports = tree.transports.into_iter();
    let mut root_transport = transports.next().unwrap();
    let mut child_transport = transports.next().unwrap();

    tree.tick.fire(b"two node round".to_vec());

    let (root_result, child_result) = futures::executor::block_on(futures::future::join(
        root.run_round(&mut root_transport, &mut OsRng),
        child.run_round(&mut child_transport, &mut OsRng),
    ));
    root_result.expect("root round succeeds");
    child_result.expect("child round succeeds");

    let root_ctx = root.round_context().unwrap();
    let child_ctx = child.round_context().unwrap();

    assert_eq!(root_ctx.v_hat, root_ctx.v_point + child_ctx.v_point);

    let lhs =
        Point::<E>::generator() * root_ctx.r_hat.unwrap() + *root.x_hat() * root_ctx.c.unwrap();
    assert_eq!(lhs, root_ctx.v_hat);
}
