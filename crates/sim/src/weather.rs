//! Weather snapshot exposed by the world.

use serde::{Deserialize, Serialize};

/// Scalar weather readings at one instant.
///
/// Angles are in degrees. Percentages range over `0..=100`. The sun altitude
/// spans `-90..=180`; values above 90 describe the sun past its zenith on the
/// opposite side of the sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherParameters {
    pub cloudiness: f32,
    pub precipitation: f32,
    pub wind_intensity: f32,
    pub sun_azimuth_angle: f32,
    pub sun_altitude_angle: f32,
    pub fog_density: f32,
    pub fog_distance: f32,
    pub wetness: f32,
}

impl WeatherParameters {
    /// Clear sky with the sun well above the horizon.
    pub const CLEAR_NOON: Self = Self {
        cloudiness: 5.0,
        precipitation: 0.0,
        wind_intensity: 10.0,
        sun_azimuth_angle: 0.0,
        sun_altitude_angle: 45.0,
        fog_density: 2.0,
        fog_distance: 0.75,
        wetness: 0.0,
    };

    /// Clear sky after sunset.
    pub const CLEAR_NIGHT: Self = Self {
        sun_altitude_angle: -90.0,
        ..Self::CLEAR_NOON
    };

    pub fn with_sun_altitude(mut self, degrees: f32) -> Self {
        self.sun_altitude_angle = degrees;
        self
    }

    pub fn with_cloudiness(mut self, percent: f32) -> Self {
        self.cloudiness = percent;
        self
    }

    pub fn with_fog_density(mut self, percent: f32) -> Self {
        self.fog_density = percent;
        self
    }
}

impl Default for WeatherParameters {
    fn default() -> Self {
        Self::CLEAR_NOON
    }
}
