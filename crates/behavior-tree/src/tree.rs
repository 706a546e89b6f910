//! Root runner for a behavior tree.

use crate::{Behavior, Node, Phase, Status};

/// Owns the root node and drives it once per host tick.
pub struct BehaviorTree<C> {
    root: Node<C>,
    tick_count: u64,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self {
            root: Node::new(root),
            tick_count: 0,
        }
    }

    /// Ticks the root once and returns its status.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.tick_count += 1;
        let status = self.root.tick(ctx);
        tracing::trace!(tree = self.root.name(), tick = self.tick_count, %status, "tree ticked");
        status
    }

    /// Aborts the tree, terminating every active node with `Invalid`.
    pub fn interrupt(&mut self, ctx: &mut C) {
        if self.root.is_active() {
            tracing::debug!(tree = self.root.name(), tick = self.tick_count, "interrupting tree");
        }
        self.root.stop(ctx, Status::Invalid);
    }

    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.root.status()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.root.phase()
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
