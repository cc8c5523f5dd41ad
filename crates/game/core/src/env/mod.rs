//! Read-only collaborators the agent consults but never owns.
//!
//! - [`TargetEntity`]: the entity the zombie senses and reacts to
//! - [`RngOracle`] / [`PcgStream`]: deterministic randomness for spawn
//!   placement, initial animation phase and wander points
mod rng;
mod target;

pub use rng::{PcgRng, PcgStream, RngOracle, compute_seed};
pub use target::{TargetEntity, TargetSnapshot};
