//! Lifecycle wrapper around a behavior.
//!
//! [`Node`] is what composites and trees actually hold. It owns the boxed
//! behavior and enforces the `initialise` → `update`* → `terminate` order:
//!
//! ```text
//! Constructed ──tick──▶ Active ──final status / stop──▶ Terminated
//!                         ▲                                 │
//!                         └──────────────tick───────────────┘
//! ```

use crate::{Behavior, Status};

/// Where a node is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Built but never ticked.
    Constructed,
    /// Initialised and ticking; `terminate` is still owed.
    Active,
    /// `terminate` has run for the latest activation.
    Terminated,
}

/// A behavior plus the lifecycle bookkeeping needed to drive it.
pub struct Node<C> {
    behavior: Box<dyn Behavior<C>>,
    phase: Phase,
    status: Option<Status>,
}

impl<C> Node<C> {
    pub fn new(behavior: Box<dyn Behavior<C>>) -> Self {
        Self {
            behavior,
            phase: Phase::Constructed,
            status: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.behavior.name()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status of the most recent tick or stop, if any.
    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Ticks the wrapped behavior once.
    ///
    /// Initialises it first if it is not active, and terminates it when the
    /// update returns anything other than `Running`.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        if self.phase != Phase::Active {
            tracing::trace!(node = self.behavior.name(), "initialise");
            self.behavior.initialise(ctx);
            self.phase = Phase::Active;
        }

        let status = self.behavior.update(ctx);
        self.status = Some(status);

        if !status.is_running() {
            self.finish(ctx, status);
        }
        status
    }

    /// Terminates an active node with the given status.
    ///
    /// Stopping a node that is not active is a no-op, so `terminate` never
    /// runs twice for the same activation.
    pub fn stop(&mut self, ctx: &mut C, status: Status) {
        if self.phase == Phase::Active {
            self.finish(ctx, status);
        }
    }

    fn finish(&mut self, ctx: &mut C, status: Status) {
        tracing::trace!(node = self.behavior.name(), %status, "terminate");
        self.behavior.terminate(ctx, status);
        self.phase = Phase::Terminated;
        self.status = Some(status);
    }
}
