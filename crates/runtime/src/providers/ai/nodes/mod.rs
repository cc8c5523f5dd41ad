//! Zombie-specific behavior tree nodes.
//!
//! This module contains concrete implementations of behavior tree leaves
//! that use `game-core` types. Nodes are divided into:
//!
//! - `conditions`: Predicates over the zombie and its target (no side effects)
//! - `actions`: Tasks that move the zombie or choose where it goes next

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
