//! The signing node's runtime configuration surface.
//!
//! This crate never reads environment variables, files, or CLI arguments itself — that is
//! the bootstrap collaborator's job. `NodeConfig` is just the plain data shape that
//! collaborator populates and hands to [`crate::driver::SigningNode::from_config`], so
//! construction stays pure and I/O stays at the process edge.

use serde::{Deserialize, Serialize};

/// Assembled once per process at node bootstrap.
///
/// Curve choice is not a field here: it is fixed at compile time via `SigningNode<E, D>`'s
/// type parameter and the crate's `curve-*` features, since a running node cannot switch
/// groups mid-life the way it can change its name or log verbosity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Stable identifier for this node, used as an identity/logging label (never as nonce
    /// material).
    pub name: String,
    /// `tracing_subscriber::EnvFilter` directive string, e.g. `"info"` or
    /// `"cosig_core=debug,warn"`. Left as a string rather than a parsed type so this crate
    /// doesn't have to depend on `tracing-subscriber` itself.
    pub log_filter: String,
}

impl NodeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), log_filter: Self::default_log_filter() }
    }

    pub fn default_log_filter() -> String {
        "info".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::NodeConfig;

    #[test]
    fn new_fills_in_the_default_log_filter() {
        let config = NodeConfig::new("node-0");
        assert_eq!(config.name, "node-0");
        assert_eq!(config.log_filter, NodeConfig::default_log_filter());
    }
}
