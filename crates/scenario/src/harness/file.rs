//! JSON scenario descriptions for the demo harness.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sim::{ActorSpec, Location, MemoryActor, MemoryWorld, VehicleLightState, WeatherParameters};

use crate::config::LightsConfig;
use crate::errors::ScenarioFileError;

/// Sun altitude as a linear function of the tick number.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunSchedule {
    /// Degrees at tick 0.
    pub start: f32,
    /// Degrees added per tick (negative for a setting sun).
    #[serde(default)]
    pub step: f32,
}

impl SunSchedule {
    pub const MIN_ALTITUDE: f32 = -90.0;
    pub const MAX_ALTITUDE: f32 = 180.0;

    pub fn altitude_at(&self, tick: u64) -> f32 {
        (self.start + self.step * tick as f32).clamp(Self::MIN_ALTITUDE, Self::MAX_ALTITUDE)
    }
}

impl Default for SunSchedule {
    fn default() -> Self {
        Self {
            start: WeatherParameters::CLEAR_NOON.sun_altitude_angle,
            step: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreetLightSpec {
    #[serde(flatten)]
    pub location: Location,
    #[serde(default)]
    pub on: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub type_id: String,
    #[serde(default = "default_vehicle_role")]
    pub role: String,
    pub location: Location,
    #[serde(default)]
    pub light_state: VehicleLightState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EgoSpec {
    #[serde(default = "default_ego_type")]
    pub type_id: String,
    pub location: Location,
    /// Cruise speed along the route, in m/s.
    pub speed: f32,
}

fn default_vehicle_role() -> String {
    "scenario".to_string()
}

fn default_ego_type() -> String {
    "vehicle.lincoln.mkz_2017".to_string()
}

/// A route scenario: world contents, weather and the ego's route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub weather: WeatherParameters,
    #[serde(default)]
    pub sun: SunSchedule,
    #[serde(default)]
    pub lights: Vec<StreetLightSpec>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
    pub ego: EgoSpec,
    pub route: Vec<Location>,
    /// Lights behavior settings for this scenario. Takes precedence over the
    /// settings the harness was started with.
    #[serde(default)]
    pub behavior: Option<LightsConfig>,
}

impl ScenarioFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioFileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ScenarioFileError> {
        let file: Self = serde_json::from_str(text)?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), ScenarioFileError> {
        if self.route.is_empty() {
            return Err(ScenarioFileError::EmptyRoute);
        }
        if !self.ego.speed.is_finite() || self.ego.speed <= 0.0 {
            return Err(ScenarioFileError::InvalidEgoSpeed(self.ego.speed));
        }
        Ok(())
    }

    /// Populates a fresh in-memory world with this scenario.
    pub fn build(&self) -> Scenario {
        let world = MemoryWorld::with_weather(self.weather);

        for light in &self.lights {
            world.add_light(light.location, light.on);
        }

        for vehicle in &self.vehicles {
            world.spawn(
                ActorSpec::new(vehicle.type_id.as_str())
                    .with_role(vehicle.role.as_str())
                    .at(vehicle.location)
                    .with_light_state(vehicle.light_state),
            );
        }

        let ego = world.spawn(
            ActorSpec::new(self.ego.type_id.as_str())
                .with_role("hero")
                .at(self.ego.location),
        );

        tracing::debug!(
            lights = self.lights.len(),
            vehicles = self.vehicles.len(),
            waypoints = self.route.len(),
            "built scenario world"
        );

        Scenario {
            world,
            ego,
            route: self.route.clone(),
            ego_speed: self.ego.speed,
            behavior: self.behavior.clone(),
            weather: self.weather,
            sun: self.sun,
        }
    }
}

/// A populated world ready to be ticked.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub world: MemoryWorld,
    pub ego: MemoryActor,
    pub route: Vec<Location>,
    pub ego_speed: f32,
    pub behavior: Option<LightsConfig>,
    weather: WeatherParameters,
    sun: SunSchedule,
}

impl Scenario {
    /// Applies the weather for `tick`.
    pub fn advance(&self, tick: u64) {
        self.world
            .set_weather(self.weather.with_sun_altitude(self.sun.altitude_at(tick)));
    }
}
