//! Scenario configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::lights::NightModeThresholds;

/// Configuration for running a route scenario in the demo harness.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub lights: LightsConfig,
    pub harness: HarnessConfig,
}

impl Config {
    pub const fn new(lights: LightsConfig, harness: HarnessConfig) -> Self {
        Self { lights, harness }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `ROUTE_LIGHTS_RADIUS` / `ROUTE_LIGHTS_SPEED_FACTOR` / `ROUTE_LIGHTS_ROLE`
    /// - `ROUTE_LIGHTS_MAX_TICKS` / `ROUTE_LIGHTS_DELTA_SECONDS`
    /// - `ROUTE_LIGHTS_SCENARIO`
    ///
    /// Unset or unparsable variables keep their defaults; call
    /// [`validate`](Self::validate) afterwards.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(radius) = read_env::<f32>("ROUTE_LIGHTS_RADIUS") {
            config.lights.radius = radius;
        }

        if let Some(factor) = read_env::<f32>("ROUTE_LIGHTS_SPEED_FACTOR") {
            config.lights.speed_factor = factor;
        }

        if let Some(role) = read_env::<String>("ROUTE_LIGHTS_ROLE") {
            config.lights.scenario_role = role;
        }

        if let Some(ticks) = read_env::<u64>("ROUTE_LIGHTS_MAX_TICKS") {
            config.harness.max_ticks = ticks.max(1);
        }

        if let Some(delta) = read_env::<f32>("ROUTE_LIGHTS_DELTA_SECONDS") {
            config.harness.delta_seconds = delta;
        }

        if let Some(path) = read_env::<PathBuf>("ROUTE_LIGHTS_SCENARIO") {
            config.harness.scenario_path = path;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lights.validate()?;
        self.harness.validate()
    }
}

/// Settings of the route lights behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    /// Minimum activation radius around the ego, in meters.
    pub radius: f32,
    /// Seconds of travel the activation radius covers at the ego's speed.
    pub speed_factor: f32,
    /// `role_name` attribute that marks vehicles belonging to the scenario.
    pub scenario_role: String,
    /// Type-id pattern used to enumerate vehicles.
    pub vehicle_filter: String,
    pub thresholds: NightModeThresholds,
}

impl LightsConfig {
    pub const DEFAULT_RADIUS: f32 = 50.0;
    pub const DEFAULT_SPEED_FACTOR: f32 = 5.0;
    pub const DEFAULT_SCENARIO_ROLE: &'static str = "scenario";
    pub const DEFAULT_VEHICLE_FILTER: &'static str = "*vehicle.*";

    pub fn with_radius(radius: f32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.speed_factor.is_finite() || self.speed_factor < 0.0 {
            return Err(ConfigError::InvalidSpeedFactor(self.speed_factor));
        }
        if self.scenario_role.trim().is_empty() {
            return Err(ConfigError::EmptyRole);
        }
        let NightModeThresholds {
            sun_altitude_low: low,
            sun_altitude_high: high,
            ..
        } = self.thresholds;
        if low >= high {
            return Err(ConfigError::InvalidSunThresholds { low, high });
        }
        Ok(())
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            speed_factor: Self::DEFAULT_SPEED_FACTOR,
            scenario_role: Self::DEFAULT_SCENARIO_ROLE.to_string(),
            vehicle_filter: Self::DEFAULT_VEHICLE_FILTER.to_string(),
            thresholds: NightModeThresholds::default(),
        }
    }
}

/// Settings of the demo tick loop.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Upper bound on ticks before the scenario is interrupted.
    pub max_ticks: u64,
    /// Simulated seconds per tick.
    pub delta_seconds: f32,
    pub scenario_path: PathBuf,
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta_seconds.is_finite() || self.delta_seconds <= 0.0 {
            return Err(ConfigError::InvalidDelta(self.delta_seconds));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_ticks: 2_000,
            delta_seconds: 0.05,
            scenario_path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/scenarios/dusk_route.json"
            )),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
