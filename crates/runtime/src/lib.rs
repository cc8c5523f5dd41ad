//! Decision engine and per-tick driver for zombie agents.
//!
//! Each [`Zombie`] owns a behavior tree built once from a preset and a
//! [`ZombieContext`] the tree is evaluated against. [`Runtime`] owns any number
//! of zombies and steps them all against one shared, read-only target.
//!
//! Modules are organized by responsibility:
//! - [`providers::ai`] holds the condition/action nodes and the tree presets
//! - [`zombie`] is the per-tick driver for a single agent
//! - [`runtime`] hosts the multi-agent orchestrator and builder
//! - [`config`] loads [`RuntimeConfig`] from RON
//! - [`api`] exposes the error types downstream clients handle
pub mod api;
pub mod config;
pub mod providers;
pub mod runtime;
pub mod zombie;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use providers::ai::{PolicyKind, ZombieContext, ZombieTree};
pub use runtime::{Runtime, RuntimeBuilder, StepReport};
pub use zombie::{Zombie, ZombieId};
