//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to access scenario state on every tick.
//!
//! A behavior has three lifecycle hooks. Hosts never call them directly;
//! they go through [`Node`](crate::Node), which guarantees that `initialise`
//! runs before the first `update` and that `terminate` runs exactly once per
//! activation.

use crate::Status;

/// A behavior tree node that can be ticked against a context.
pub trait Behavior<C>: Send + Sync {
    /// Human readable name, used in logs.
    fn name(&self) -> &str;

    /// Called before the first `update` of every activation.
    fn initialise(&mut self, _ctx: &mut C) {}

    /// Advance this behavior by one tick.
    ///
    /// # Returns
    ///
    /// - `Status::Running` while the behavior needs more ticks
    /// - `Status::Success` / `Status::Failure` once it is done
    fn update(&mut self, ctx: &mut C) -> Status;

    /// Called once when the activation ends, either because `update`
    /// returned a final status or because a parent stopped the node
    /// (`status == Status::Invalid`).
    fn terminate(&mut self, _ctx: &mut C, _status: Status) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn initialise(&mut self, ctx: &mut C) {
        (**self).initialise(ctx)
    }

    #[inline]
    fn update(&mut self, ctx: &mut C) -> Status {
        (**self).update(ctx)
    }

    #[inline]
    fn terminate(&mut self, ctx: &mut C, status: Status) {
        (**self).terminate(ctx, status)
    }
}
