//! Errors raised while evaluating a tree.
//!
//! Leaves report their own failures as boxed errors; the node wrapping them
//! attaches its name so the owner can tell which part of the policy broke.
//! Composites never catch anything and propagate with `?`.

use thiserror::Error;

/// Error type produced by predicates and tasks.
pub type LeafError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for predicates and tasks.
pub type LeafResult<T> = Result<T, LeafError>;

/// A leaf could not be evaluated, aborting the current tick.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("condition `{node}` failed to evaluate")]
    Condition {
        node: &'static str,
        #[source]
        source: LeafError,
    },

    #[error("action `{node}` failed to execute")]
    Action {
        node: &'static str,
        #[source]
        source: LeafError,
    },
}

impl BehaviorError {
    /// Name of the leaf node that failed.
    pub fn node(&self) -> &'static str {
        match self {
            Self::Condition { node, .. } | Self::Action { node, .. } => node,
        }
    }
}
