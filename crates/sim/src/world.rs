//! Traits a simulator host implements for scenario behaviors.
//!
//! All methods take `&self`: handles are references into state owned by the
//! simulator, the way a client connection would be. Calls are synchronous
//! and assumed to succeed; transport failures are the host's concern.

use serde::{Deserialize, Serialize};

use crate::{Light, LightId, Location, Vector3D, VehicleLightState, WeatherParameters};

/// Identifier of an actor inside the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Handle to a simulated actor (vehicle, walker, prop).
pub trait Actor: Clone + Send + Sync {
    fn id(&self) -> ActorId;

    /// Blueprint type id, e.g. `vehicle.audi.a2`.
    fn type_id(&self) -> String;

    /// Current location, or `None` while the actor is not placed in the world.
    fn location(&self) -> Option<Location>;

    fn velocity(&self) -> Vector3D;

    fn light_state(&self) -> VehicleLightState;

    fn set_light_state(&self, state: VehicleLightState);

    /// Spawn attribute lookup (`role_name`, `color`, ...).
    fn attribute(&self, key: &str) -> Option<String>;

    /// Ground speed in m/s.
    fn speed(&self) -> f32 {
        self.velocity().planar_length()
    }
}

/// Handle to the world's street light subsystem.
pub trait LightManager: Clone + Send + Sync {
    fn all_lights(&self) -> Vec<Light>;

    /// Switches every listed light on in one call.
    fn turn_on(&self, lights: &[LightId]);

    /// Switches every listed light off in one call.
    fn turn_off(&self, lights: &[LightId]);

    /// Enables or disables the simulator's automatic day/night switching.
    fn set_day_night_cycle(&self, active: bool);

    fn is_day_night_cycle_active(&self) -> bool;
}

/// Handle to a simulated world.
pub trait World: Clone + Send + Sync {
    type Actor: Actor;
    type LightManager: LightManager;

    fn weather(&self) -> WeatherParameters;

    fn light_manager(&self) -> Self::LightManager;

    /// Actors whose type id matches the wildcard `pattern`
    /// (see [`matches_pattern`](crate::matches_pattern)).
    fn actors(&self, pattern: &str) -> Vec<Self::Actor>;
}
