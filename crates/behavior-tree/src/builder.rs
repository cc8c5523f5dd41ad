//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new("name", vec![...]))`, you can use shorter functions
//! like `sequence("name", vec![...])`.

use crate::{Action, Behavior, Condition, Predicate, Selector, Sequence, Task};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(name, children))`.
#[inline]
pub fn sequence<C: 'static>(
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(name, children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(name, children))`.
#[inline]
pub fn selector<C: 'static>(
    name: &'static str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(name, children))
}

/// Creates a condition leaf.
///
/// Shorthand for `Box::new(Condition::new(name, predicate))`.
#[inline]
pub fn condition<C: 'static, P>(name: &'static str, predicate: P) -> Box<dyn Behavior<C>>
where
    P: Predicate<C> + 'static,
{
    Box::new(Condition::new(name, predicate))
}

/// Creates an action leaf.
///
/// Shorthand for `Box::new(Action::new(name, task))`.
#[inline]
pub fn action<C: 'static, T>(name: &'static str, task: T) -> Box<dyn Behavior<C>>
where
    T: Task<C> + 'static,
{
    Box::new(Action::new(name, task))
}
