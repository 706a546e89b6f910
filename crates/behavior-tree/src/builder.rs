//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(name, vec![...]))`,
//! you can use shorter functions like `sequence(name, vec![...])`.

use crate::{Behavior, Parallel, ParallelPolicy, Selector, Sequence};

/// Boxes a leaf behavior.
#[inline]
pub fn node<C: 'static, B: Behavior<C> + 'static>(behavior: B) -> Box<dyn Behavior<C>> {
    Box::new(behavior)
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(name, children))`.
#[inline]
pub fn sequence<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(name, children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(name, children))`.
#[inline]
pub fn selector<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(name, children))
}

/// Creates a parallel node.
///
/// Shorthand for `Box::new(Parallel::new(name, policy, children))`.
#[inline]
pub fn parallel<C: 'static>(
    name: &str,
    policy: ParallelPolicy,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::new(name, policy, children))
}
