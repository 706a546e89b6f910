//! Route scenario behaviors for a driving simulator.
//!
//! The core of this crate is [`RouteLightsBehavior`], a behavior-tree node
//! that keeps street lights and scenario vehicle lights on around the ego
//! vehicle while the weather makes the scene dark. It talks to the simulator
//! only through the [`sim::World`] handle it is constructed with.
//!
//! [`harness`] runs the node end-to-end against the in-memory world.

pub mod config;
pub mod errors;
pub mod harness;
pub mod lights;

pub use config::{Config, HarnessConfig, LightsConfig};
pub use errors::{ConfigError, Result, ScenarioError, ScenarioFileError};
pub use lights::{NightCause, NightModeThresholds, RouteLightsBehavior, is_night_mode};
