//! Lifecycle-aware behavior tree library for tick-driven scenarios.
//!
//! This library provides a small behavior tree implementation for hosts that
//! advance a simulation in discrete ticks and let behaviors span many of them.
//!
//! - **Running state**: Behaviors may report that they need more ticks
//! - **Lifecycle hooks**: `initialise` / `update` / `terminate`, with
//!   `terminate` guaranteed once per activation (also on abort)
//! - **No inheritance**: Hosts only see the [`Behavior`] trait
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Node`]: Lifecycle wrapper enforcing hook order
//! - [`Status`]: Success, Failure, Running or Invalid
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - [`BehaviorTree`]: Root runner

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Parallel, ParallelPolicy, Selector, Sequence};
pub use node::{Node, Phase};
pub use status::Status;
pub use tree::BehaviorTree;
