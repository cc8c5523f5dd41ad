//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Neither composite keeps any state between ticks. Every tick starts again
//! from the first child, so a child that returned `Running` last tick is only
//! resumed if every sibling before it still lets evaluation reach it.

use crate::{Behavior, Status, TickResult};

/// Executes child behaviors in sequence until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops immediately**
///   and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: &'static str, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { name, children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> TickResult {
        // Execute children in order until one does not succeed
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => continue, // Move to next child
                status => {
                    tracing::trace!(
                        node = self.name,
                        child = child.name(),
                        ?status,
                        "sequence stopped"
                    );
                    return Ok(status); // Short-circuit
                }
            }
        }
        // All children succeeded
        tracing::trace!(node = self.name, "sequence succeeded");
        Ok(Status::Success)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Tries child behaviors in priority order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: &'static str, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { name, children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> TickResult {
        // Try children in order until one does not fail
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Failure => continue, // Try next child
                status => {
                    tracing::trace!(
                        node = self.name,
                        child = child.name(),
                        ?status,
                        "selector committed"
                    );
                    return Ok(status); // Short-circuit
                }
            }
        }
        // All children failed
        tracing::trace!(node = self.name, "selector exhausted");
        Ok(Status::Failure)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BehaviorError;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&self, ctx: &mut TestContext) -> TickResult {
            ctx.value += 1;
            Ok(Status::Success)
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&self, ctx: &mut TestContext) -> TickResult {
            ctx.value -= 1;
            Ok(Status::Success)
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&self, _ctx: &mut TestContext) -> TickResult {
            Ok(Status::Failure)
        }
    }

    /// Increments and reports Running, like a multi-tick action.
    struct StepRunning;
    impl Behavior<TestContext> for StepRunning {
        fn tick(&self, ctx: &mut TestContext) -> TickResult {
            ctx.value += 10;
            Ok(Status::Running)
        }
    }

    struct Explode;
    impl Behavior<TestContext> for Explode {
        fn tick(&self, _ctx: &mut TestContext) -> TickResult {
            Err(BehaviorError::Action {
                node: "explode",
                source: "boom".into(),
            })
        }
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new("seq", vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx).unwrap(), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new(
            "seq",
            vec![
                Box::new(Increment),
                Box::new(FailAlways),
                Box::new(Increment), // Should not execute
            ],
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx).unwrap(), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq = Sequence::new(
            "seq",
            vec![
                Box::new(Increment),
                Box::new(StepRunning),
                Box::new(Decrement), // Should not execute
            ],
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx).unwrap(), Status::Running);
        assert_eq!(ctx.value, 11);
    }

    #[test]
    fn sequence_restarts_from_first_child_every_tick() {
        let seq = Sequence::new("seq", vec![Box::new(Increment), Box::new(StepRunning)]);

        let mut ctx = TestContext { value: 0 };
        seq.tick(&mut ctx).unwrap();
        seq.tick(&mut ctx).unwrap();
        // Increment ran again on the second tick: no resume-at-running-child
        assert_eq!(ctx.value, 22);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Selector::new(
            "sel",
            vec![
                Box::new(FailAlways),
                Box::new(Increment),
                Box::new(Decrement), // Should not execute
            ],
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx).unwrap(), Status::Success);
        assert_eq!(ctx.value, 1); // Only Increment executed
    }

    #[test]
    fn selector_commits_to_running_child() {
        let sel = Selector::new(
            "sel",
            vec![
                Box::new(FailAlways),
                Box::new(StepRunning),
                Box::new(Increment), // Should not execute
            ],
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx).unwrap(), Status::Running);
        assert_eq!(ctx.value, 10);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new("sel", vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx).unwrap(), Status::Failure);
    }

    #[test]
    fn leaf_error_aborts_the_tick() {
        let sel = Selector::new(
            "sel",
            vec![
                Box::new(Sequence::<TestContext>::new(
                    "seq",
                    vec![Box::new(Increment), Box::new(Explode)],
                )),
                Box::new(Decrement), // Never reached
            ],
        );

        let mut ctx = TestContext { value: 0 };
        let err = sel.tick(&mut ctx).unwrap_err();
        assert_eq!(err.node(), "explode");
        assert_eq!(ctx.value, 1);
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_is_rejected() {
        let _ = Selector::<TestContext>::new("empty", Vec::new());
    }
}
