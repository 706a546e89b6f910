//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// Scenario behaviors are ticked once per simulation step and may span many
/// steps, so a node can report that it is still in progress:
/// - Conditions usually resolve immediately to `Success` or `Failure`
/// - Long-lived behaviors (route following, lighting control) return `Running`
/// - `Invalid` is never returned by `update`; it is the status a parent passes
///   to `terminate` when it stops a child before completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior failed.
    Failure,

    /// The behavior has not finished and wants to be ticked again.
    Running,

    /// The behavior was interrupted by its parent before it finished.
    Invalid,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` once the behavior reached a final outcome.
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }
}
