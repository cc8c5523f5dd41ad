//! Behavior-tree AI for zombies.
//!
//! The zombie's policy is a tree of condition and action leaves combined by
//! sequences and selectors, re-walked from the root every tick:
//!
//! 1. **Sensing** ([`nodes::conditions`]): is the target nearby, who holds
//!    more points
//! 2. **Acting** ([`nodes::actions`]): walk toward a point, chase the target,
//!    run away from it, pick a new point to wander to
//! 3. **Assembly** ([`presets`]): fixed compositions of the above, selected
//!    by [`PolicyKind`]
//!
//! # Core Components
//!
//! - [`ZombieContext`]: blackboard holding the zombie's state, the target
//!   snapshot for this tick and the zombie's random stream
//! - [`ZombieTree`]: boxed root node evaluated against a [`ZombieContext`]

pub mod context;
pub mod nodes;
pub mod presets;

// Re-export public API
pub use context::ZombieContext;
pub use presets::{PolicyKind, ZombieTree};
