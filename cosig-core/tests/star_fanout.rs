//! One root with four leaf children.
//! `V_hat_root = V_root + sum(V_child)`, and the signature verifies.

use cosig_core::SigningNode;
use cosig_testkit::{build_tree, TreeTopology};
use generic_ec::curves::Secp256k1;
use generic_ec::Point;
use rand::rngs::OsRng;

type E = Secp256k1;

#[test]
fn star_of_four_verifies() {
    let mut rng = OsRng;
    let tree = build_tree::<E, _>(&TreeTopology::star(4), &mut rng);

    let mut nodes: Vec<SigningNode<E>> = tree
        .keys
        .iter()
        .zip(&tree.x_hat)
        .enumerate()
        .map(|(i, (keys, x_hat))| SigningNode::new(format!("node-{i}"), keys.clone(), *x_hat))
        .collect();
    let mut transports = tree.transports;

    tree.tick.fire(b"star round".to_vec());

    futures::executor::block_on(async {
        let mut rngs: Vec<OsRng> = (0..5).map(|_| OsRng).collect();
        let results = futures::future::join_all(
            nodes
                .iter_mut()
                .zip(transports.iter_mut())
                .zip(rngs.iter_mut())
                .map(|((node, transport), rng)| node.run_round(transport, rng)),
        )
        .await;

        for (i, result) in results.into_iter().enumerate() {
            result.unwrap_or_else(|e| panic!("node-{i} round failed: {e}"));
        }
    });

    let root_ctx = nodes[0].round_context().expect("root completed a round");
    let children_v: Point<E> = (1..5)
        .map(|i| nodes[i].round_context().expect("child completed a round").v_point)
        .fold(root_ctx.v_point, |acc, v| acc + v);
    assert_eq!(root_ctx.v_hat, children_v);

    let lhs =
        Point::<E>::generator() * root_ctx.r_hat.unwrap() + *nodes[0].x_hat() * root_ctx.c.unwrap();
    assert_eq!(lhs, root_ctx.v_hat);
}
