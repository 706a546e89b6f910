//! Weather-driven lighting for route scenarios.
//!
//! - [`night_mode`]: classifies a weather snapshot as day or night
//! - [`behavior`]: [`RouteLightsBehavior`], the behavior-tree node that
//!   switches street and vehicle lights around the ego

pub mod behavior;
pub mod night_mode;

pub use behavior::RouteLightsBehavior;
pub use night_mode::{NightCause, NightModeThresholds, is_night_mode};
