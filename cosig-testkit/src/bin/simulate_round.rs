//! Drives one collective-signing round over an in-memory tree and prints the result.
//!
//! Mainly a manual-poking tool during development; the integration tests in
//! `cosig-core/tests` are the source of truth for correctness.

use anyhow::{Context, Result};
use cosig_core::{NodeConfig, SigningNode};
use cosig_testkit::{build_tree, TreeTopology};
use rand::rngs::OsRng;

type TestCurve = generic_ec::curves::Secp256k1;

fn main() -> Result<()> {
    match args() {
        Topology::Chain(len) => run(TreeTopology::chain(len), b"simulate_round chain".to_vec()),
        Topology::Star(fanout) => run(TreeTopology::star(fanout), b"simulate_round star".to_vec()),
    }
}

#[derive(Clone, Debug)]
enum Topology {
    Chain(usize),
    Star(usize),
}

fn args() -> Topology {
    use bpaf::Parser;
    let len = bpaf::long("len").argument::<usize>("N").fallback(3);
    let chain = bpaf::command(
        "chain",
        bpaf::construct!(len).map(Topology::Chain).to_options().help("Simulate a chain of N nodes"),
    );
    let fanout = bpaf::long("fanout").argument::<usize>("N").fallback(4);
    let star = bpaf::command(
        "star",
        bpaf::construct!(fanout).map(Topology::Star).to_options().help("Simulate a root with N children"),
    );
    bpaf::construct!([chain, star]).to_options().descr("Simulate a collective signing round").run()
}

fn run(topology: TreeTopology, message: Vec<u8>) -> Result<()> {
    let mut rng = OsRng;
    let tree = build_tree::<TestCurve, _>(&topology, &mut rng);
    let n = topology.children.len();

    let mut nodes: Vec<SigningNode<TestCurve>> = tree
        .keys
        .iter()
        .zip(&tree.x_hat)
        .enumerate()
        .map(|(i, (keys, x_hat))| {
            SigningNode::from_config(NodeConfig::new(format!("node-{i}")), keys.clone(), *x_hat)
        })
        .collect();
    let mut transports = tree.transports;

    tree.tick.fire(message);

    futures::executor::block_on(async {
        let mut rngs: Vec<OsRng> = (0..n).map(|_| OsRng).collect();
        let rounds = nodes
            .iter_mut()
            .zip(transports.iter_mut())
            .zip(rngs.iter_mut())
            .map(|((node, transport), rng)| node.run_round(transport, rng));
        futures::future::join_all(rounds).await
    })
    .into_iter()
    .enumerate()
    .try_for_each(|(i, result)| result.with_context(|| format!("node-{i} round failed")))?;

    println!("round complete over {n} nodes");
    Ok(())
}
