//! Lightweight reactive behavior tree library for real-time agents.
//!
//! A tree is re-walked from its root on every tick. Nothing is remembered
//! between ticks except what the leaves store in the context they are
//! evaluated against:
//!
//! - **Tri-state**: every tick yields `Success`, `Failure` or `Running`
//! - **No memory**: composites restart from their first child each tick, so a
//!   `Running` child never pins a sequence or selector to its position
//! - **Synchronous**: evaluation is depth-first and completes before `tick`
//!   returns; `Running` only defers completion to a later tick
//! - **Fallible leaves**: a leaf error aborts the whole tick and surfaces as
//!   [`BehaviorError`]; the tree never swallows it
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Leaf nodes: [`Condition`] (wraps a [`Predicate`]), [`Action`] (wraps a [`Task`])
//! - Composite nodes: [`Sequence`], [`Selector`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod error;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, TickResult};
pub use composite::{Selector, Sequence};
pub use error::{BehaviorError, LeafError, LeafResult};
pub use leaf::{Action, Condition, Predicate, Task};
pub use status::Status;
