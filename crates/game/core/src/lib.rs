//! Simulation state and math for the zombie agent.
//!
//! `game-core` owns everything about the agent that is not decision making:
//! continuous motion toward a point, proximity sensing in meters, animation
//! phase, score bookkeeping and the read-only view of the target entity.
//! The behavior tree in `runtime` drives it exclusively through
//! [`ZombieState`]'s methods.
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use config::GameConfig;
pub use env::{PcgRng, PcgStream, RngOracle, TargetEntity, TargetSnapshot, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Activity, AgentSnapshot, AnimationState, BoundingBox, Position, WorldBounds, ZombieState,
    within_radius,
};
