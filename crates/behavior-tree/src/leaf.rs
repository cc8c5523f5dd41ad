//! Leaf behavior nodes.
//!
//! Leaves do the actual work of a tree. Their logic lives in small
//! value-holding structs that implement [`Predicate`] or [`Task`]; any
//! parameters (radii, thresholds) are plain fields bound at construction.
//! [`Condition`] and [`Action`] wrap those structs, give them a name and
//! adapt them to the [`Behavior`] contract.

use crate::{Behavior, BehaviorError, LeafResult, Status, TickResult};

/// A side-effect free check against the context.
pub trait Predicate<C>: Send + Sync {
    /// Returns whether the condition holds.
    fn check(&self, ctx: &C) -> LeafResult<bool>;
}

/// An effectful step that may take several ticks to complete.
pub trait Task<C>: Send + Sync {
    /// Performs one tick worth of work and reports progress.
    fn run(&self, ctx: &mut C) -> LeafResult<Status>;
}

/// Evaluates a [`Predicate`], mapping `true` to `Success` and `false` to
/// `Failure`.
///
/// A condition never returns `Running` and never mutates the context: the
/// predicate only receives a shared reference.
pub struct Condition<P> {
    name: &'static str,
    predicate: P,
}

impl<P> Condition<P> {
    /// Creates a named condition around `predicate`.
    pub fn new(name: &'static str, predicate: P) -> Self {
        Self { name, predicate }
    }
}

impl<C, P: Predicate<C>> Behavior<C> for Condition<P> {
    fn tick(&self, ctx: &mut C) -> TickResult {
        self.predicate
            .check(ctx)
            .map(Status::from)
            .map_err(|source| BehaviorError::Condition {
                node: self.name,
                source,
            })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Runs a [`Task`] and passes its status through unchanged.
pub struct Action<T> {
    name: &'static str,
    task: T,
}

impl<T> Action<T> {
    /// Creates a named action around `task`.
    pub fn new(name: &'static str, task: T) -> Self {
        Self { name, task }
    }
}

impl<C, T: Task<C>> Behavior<C> for Action<T> {
    fn tick(&self, ctx: &mut C) -> TickResult {
        self.task.run(ctx).map_err(|source| BehaviorError::Action {
            node: self.name,
            source,
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Predicate<TestContext> for IsPositive {
        fn check(&self, ctx: &TestContext) -> LeafResult<bool> {
            Ok(ctx.value > 0)
        }
    }

    struct Broken;
    impl Predicate<TestContext> for Broken {
        fn check(&self, _ctx: &TestContext) -> LeafResult<bool> {
            Err("sensor offline".into())
        }
    }

    /// Counts up to `goal`, one step per tick.
    struct CountTo {
        goal: i32,
    }
    impl Task<TestContext> for CountTo {
        fn run(&self, ctx: &mut TestContext) -> LeafResult<Status> {
            ctx.value += 1;
            Ok(if ctx.value >= self.goal {
                Status::Success
            } else {
                Status::Running
            })
        }
    }

    #[test]
    fn condition_maps_true_to_success() {
        let cond = Condition::new("positive", IsPositive);

        let mut ctx = TestContext { value: 3 };
        assert_eq!(cond.tick(&mut ctx).unwrap(), Status::Success);
    }

    #[test]
    fn condition_maps_false_to_failure() {
        let cond = Condition::new("positive", IsPositive);

        let mut ctx = TestContext { value: -3 };
        assert_eq!(cond.tick(&mut ctx).unwrap(), Status::Failure);
        assert_eq!(ctx.value, -3);
    }

    #[test]
    fn condition_error_carries_node_name() {
        let cond = Condition::new("broken sensor", Broken);

        let mut ctx = TestContext { value: 0 };
        let err = cond.tick(&mut ctx).unwrap_err();
        assert_eq!(err.node(), "broken sensor");
        assert!(matches!(err, BehaviorError::Condition { .. }));
    }

    #[test]
    fn action_reports_running_until_done() {
        let action = Action::new("count", CountTo { goal: 3 });

        let mut ctx = TestContext { value: 0 };
        assert_eq!(action.tick(&mut ctx).unwrap(), Status::Running);
        assert_eq!(action.tick(&mut ctx).unwrap(), Status::Running);
        assert_eq!(action.tick(&mut ctx).unwrap(), Status::Success);
        assert_eq!(action.name(), "count");
    }
}
