//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read the agent's surroundings and
//! mutate the agent it drives.

use crate::{BehaviorError, Status};

/// Outcome of a single node evaluation.
pub type TickResult = Result<Status, BehaviorError>;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Conditions only
    ///   read it; actions mutate the agent state it carries.
    ///
    /// # Returns
    ///
    /// - `Ok(Status::Success)` if the behavior succeeded
    /// - `Ok(Status::Failure)` if the behavior failed
    /// - `Ok(Status::Running)` if the behavior needs more ticks
    /// - `Err(_)` if a leaf could not be evaluated at all
    fn tick(&self, ctx: &mut C) -> TickResult;

    /// Human-readable node label used in traces and errors.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> TickResult {
        (**self).tick(ctx)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
