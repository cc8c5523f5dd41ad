//! Agent state representation.
//!
//! This module owns the zombie's mutable state and the plain geometry it is
//! expressed in. Decision making lives elsewhere; it mutates this state only
//! through the methods on [`ZombieState`].
mod geometry;
mod snapshot;
mod zombie;

pub use geometry::{Position, WorldBounds, within_radius};
pub use snapshot::{AgentSnapshot, BoundingBox};
pub use zombie::{Activity, AnimationState, ZombieState};
