//! Simulator collaborator contract.
//!
//! Scenario behaviors never own simulator objects; they hold cheap handles
//! and talk to the host through the traits in [`world`]. The host decides
//! what a handle points at: a remote simulator connection, or the
//! [`memory`] world used by tests and the demo harness.
//!
//! # Modules
//!
//! - [`geom`]: `Location` and `Vector3D`
//! - [`weather`]: `WeatherParameters` snapshot
//! - [`lights`]: street `Light` records and `VehicleLightState` flags
//! - [`world`]: `World`, `LightManager` and `Actor` traits
//! - [`pattern`]: actor type-id wildcard matching
//! - [`memory`]: in-process implementation of the contract

pub mod geom;
pub mod lights;
pub mod memory;
pub mod pattern;
pub mod weather;
pub mod world;

pub use geom::{Location, Vector3D};
pub use lights::{Light, LightId, VehicleLightState};
pub use memory::{ActorSpec, CallStats, MemoryActor, MemoryLightManager, MemoryWorld};
pub use pattern::matches_pattern;
pub use weather::WeatherParameters;
pub use world::{Actor, ActorId, LightManager, World};
