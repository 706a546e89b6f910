//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the building blocks scenarios are assembled from:
//! [`Sequence`] (AND logic), [`Selector`] (OR logic) and [`Parallel`]
//! (concurrent children, e.g. a route next to its environment behaviors).
//!
//! Every composite stops its still-active children with [`Status::Invalid`]
//! when it terminates, so a child's `terminate` hook runs even when the
//! branch is aborted.

use crate::{Behavior, Node, Status};

fn wrap<C>(children: Vec<Box<dyn Behavior<C>>>) -> Vec<Node<C>> {
    children.into_iter().map(Node::new).collect()
}

fn stop_all<C>(children: &mut [Node<C>], ctx: &mut C) {
    for child in children {
        child.stop(ctx, Status::Invalid);
    }
}

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   from that child on the next tick
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: String,
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            name: name.into(),
            children: wrap(children),
            current: 0,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self, _ctx: &mut C) {
        self.current = 0;
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Success => self.current += 1,
                Status::Running => return Status::Running,
                Status::Failure | Status::Invalid => return Status::Failure,
            }
        }
        // All children succeeded
        Status::Success
    }

    fn terminate(&mut self, ctx: &mut C, _status: Status) {
        stop_all(&mut self.children, ctx);
    }
}

/// Executes child behaviors in priority order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right on every tick:
/// - If a child returns `Success` or `Running`, the selector **stops** and
///   returns that status; lower-priority children that were still running
///   are stopped with `Invalid`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    name: String,
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            name: name.into(),
            children: wrap(children),
        }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        for index in 0..self.children.len() {
            match self.children[index].tick(ctx) {
                Status::Failure | Status::Invalid => continue,
                status => {
                    // Higher priority child took over
                    stop_all(&mut self.children[index + 1..], ctx);
                    return status;
                }
            }
        }
        // All children failed
        Status::Failure
    }

    fn terminate(&mut self, ctx: &mut C, _status: Status) {
        stop_all(&mut self.children, ctx);
    }
}

/// When a [`Parallel`] node counts as successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ParallelPolicy {
    /// Succeed as soon as any child succeeds.
    SuccessOnOne,
    /// Succeed once every child has succeeded.
    SuccessOnAll,
}

/// Ticks all child behaviors on every tick.
///
/// # Semantics
///
/// - Any child `Failure` fails the parallel immediately
/// - Success is decided by the [`ParallelPolicy`]
/// - Children that already succeeded during this activation are not ticked again
/// - When the parallel completes, children still running are stopped with `Invalid`
///
/// A route scenario typically runs its driving behavior under a
/// `SuccessOnOne` parallel next to never-ending environment behaviors such
/// as lighting control: the route finishing ends the scenario and the
/// environment behaviors get their `terminate` call.
pub struct Parallel<C> {
    name: String,
    policy: ParallelPolicy,
    children: Vec<Node<C>>,
    succeeded: Vec<bool>,
}

impl<C> Parallel<C> {
    /// Creates a new parallel node.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(
        name: impl Into<String>,
        policy: ParallelPolicy,
        children: Vec<Box<dyn Behavior<C>>>,
    ) -> Self {
        assert!(
            !children.is_empty(),
            "Parallel must have at least one child"
        );
        let succeeded = vec![false; children.len()];
        Self {
            name: name.into(),
            policy,
            children: wrap(children),
            succeeded,
        }
    }

    #[inline]
    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self, _ctx: &mut C) {
        self.succeeded.iter_mut().for_each(|done| *done = false);
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        let mut failed = false;

        for (child, done) in self.children.iter_mut().zip(self.succeeded.iter_mut()) {
            if *done {
                continue;
            }
            match child.tick(ctx) {
                Status::Success => *done = true,
                Status::Running => {}
                Status::Failure | Status::Invalid => failed = true,
            }
        }

        if failed {
            return Status::Failure;
        }

        let successes = self.succeeded.iter().filter(|done| **done).count();
        let complete = match self.policy {
            ParallelPolicy::SuccessOnOne => successes > 0,
            ParallelPolicy::SuccessOnAll => successes == self.children.len(),
        };

        if complete {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn terminate(&mut self, ctx: &mut C, status: Status) {
        tracing::debug!(parallel = %self.name, policy = %self.policy, %status, "parallel finished");
        stop_all(&mut self.children, ctx);
    }
}
