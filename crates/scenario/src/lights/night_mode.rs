//! Decides whether the scene is dark enough to need artificial light.

use serde::{Deserialize, Serialize};
use sim::WeatherParameters;

/// Why the scene counts as dark. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NightCause {
    /// The sun is at or below the low threshold, or at or past the high one.
    SunLow,
    /// Cloud cover blocks most of the light.
    Overcast,
    /// Fog is dense enough that ambient light drops off quickly.
    Fog,
}

/// Hard cutoffs for night mode. All comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightModeThresholds {
    /// Degrees. Night when the weather's `sun_altitude_angle` is at most this value.
    pub sun_altitude_low: f32,
    /// Degrees. Night when the weather's `sun_altitude_angle` is at least this value.
    pub sun_altitude_high: f32,
    /// Percent. Night when the weather's `cloudiness` is at least this value.
    pub cloudiness: f32,
    /// Percent. Night when the weather's `fog_density` is at least this value.
    pub fog_density: f32,
}

impl NightModeThresholds {
    pub const DEFAULT_SUN_ALTITUDE_LOW: f32 = 15.0;
    pub const DEFAULT_SUN_ALTITUDE_HIGH: f32 = 165.0;
    // Past these values the amount of light in the scene drops sharply
    pub const DEFAULT_CLOUDINESS: f32 = 95.0;
    pub const DEFAULT_FOG_DENSITY: f32 = 40.0;

    pub const fn new() -> Self {
        Self {
            sun_altitude_low: Self::DEFAULT_SUN_ALTITUDE_LOW,
            sun_altitude_high: Self::DEFAULT_SUN_ALTITUDE_HIGH,
            cloudiness: Self::DEFAULT_CLOUDINESS,
            fog_density: Self::DEFAULT_FOG_DENSITY,
        }
    }

    /// Returns the first reason the weather calls for lights, if any.
    pub fn classify(&self, weather: &WeatherParameters) -> Option<NightCause> {
        let sun = weather.sun_altitude_angle;
        if sun <= self.sun_altitude_low || sun >= self.sun_altitude_high {
            return Some(NightCause::SunLow);
        }
        if weather.cloudiness >= self.cloudiness {
            return Some(NightCause::Overcast);
        }
        if weather.fog_density >= self.fog_density {
            return Some(NightCause::Fog);
        }
        None
    }

    #[inline]
    pub fn is_night(&self, weather: &WeatherParameters) -> bool {
        self.classify(weather).is_some()
    }
}

impl Default for NightModeThresholds {
    fn default() -> Self {
        Self::new()
    }
}

/// Night-mode check with the default thresholds.
#[inline]
pub fn is_night_mode(weather: &WeatherParameters) -> bool {
    NightModeThresholds::new().is_night(weather)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(sun: f32, clouds: f32, fog: f32) -> WeatherParameters {
        WeatherParameters::CLEAR_NOON
            .with_sun_altitude(sun)
            .with_cloudiness(clouds)
            .with_fog_density(fog)
    }

    #[test]
    fn clear_daylight_is_day() {
        for sun in [15.5, 30.0, 90.0, 120.0, 164.9] {
            for clouds in [0.0, 50.0, 94.9] {
                for fog in [0.0, 20.0, 39.9] {
                    assert!(
                        !is_night_mode(&weather(sun, clouds, fog)),
                        "sun={sun} clouds={clouds} fog={fog}"
                    );
                }
            }
        }
    }

    #[test]
    fn sun_thresholds_are_inclusive() {
        assert!(is_night_mode(&weather(15.0, 0.0, 0.0)));
        assert!(is_night_mode(&weather(165.0, 0.0, 0.0)));
        assert!(is_night_mode(&weather(-30.0, 0.0, 0.0)));
        assert!(is_night_mode(&weather(180.0, 0.0, 0.0)));
    }

    #[test]
    fn heavy_clouds_or_fog_trigger_night() {
        let thresholds = NightModeThresholds::default();
        assert_eq!(
            thresholds.classify(&weather(60.0, 95.0, 0.0)),
            Some(NightCause::Overcast)
        );
        assert_eq!(
            thresholds.classify(&weather(60.0, 0.0, 40.0)),
            Some(NightCause::Fog)
        );
    }

    #[test]
    fn sun_takes_precedence_over_other_causes() {
        let thresholds = NightModeThresholds::default();
        assert_eq!(
            thresholds.classify(&weather(0.0, 100.0, 100.0)),
            Some(NightCause::SunLow)
        );
        assert_eq!(
            thresholds.classify(&weather(60.0, 100.0, 100.0)),
            Some(NightCause::Overcast)
        );
    }

    #[test]
    fn custom_thresholds_move_the_cutoffs() {
        let thresholds = NightModeThresholds {
            sun_altitude_low: 5.0,
            ..NightModeThresholds::default()
        };
        assert!(!thresholds.is_night(&weather(10.0, 0.0, 0.0)));
        assert!(thresholds.is_night(&weather(5.0, 0.0, 0.0)));
    }
}
