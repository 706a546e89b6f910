//! In-process world implementing the simulator contract.
//!
//! All handles share one `WorldState` behind an `Arc<Mutex<_>>`, so a
//! behavior holding a [`MemoryWorld`] or [`MemoryActor`] observes every
//! change the harness makes between ticks, like a client handle would.
//!
//! The world also counts batched light-manager calls in [`CallStats`] so
//! callers can check that lights are switched in batches, not one by one.

mod actor;
mod light_manager;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use actor::{ActorSpec, MemoryActor};
pub use light_manager::MemoryLightManager;

use crate::{
    ActorId, Light, LightId, Location, Vector3D, VehicleLightState, WeatherParameters, World,
    matches_pattern,
};

/// Counters for light-manager calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallStats {
    /// Number of `turn_on` calls.
    pub turn_on_calls: usize,
    /// Number of `turn_off` calls.
    pub turn_off_calls: usize,
    /// Number of lights switched on, summed over all `turn_on` calls.
    pub lights_switched_on: usize,
    /// Number of lights switched off, summed over all `turn_off` calls.
    pub lights_switched_off: usize,
}

impl CallStats {
    /// Total number of batched switch calls.
    pub fn switch_calls(&self) -> usize {
        self.turn_on_calls + self.turn_off_calls
    }
}

#[derive(Debug)]
pub(crate) struct ActorRecord {
    pub id: ActorId,
    pub type_id: String,
    pub attributes: Vec<(String, String)>,
    pub location: Option<Location>,
    pub velocity: Vector3D,
    pub light_state: VehicleLightState,
}

#[derive(Debug)]
pub(crate) struct WorldState {
    pub weather: WeatherParameters,
    pub day_night_cycle: bool,
    pub lights: Vec<Light>,
    pub actors: Vec<ActorRecord>,
    pub stats: CallStats,
}

impl WorldState {
    pub fn actor(&self, id: ActorId) -> Option<&ActorRecord> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorRecord> {
        self.actors.iter_mut().find(|a| a.id == id)
    }
}

pub(crate) type Shared = Arc<Mutex<WorldState>>;

/// Lock the shared state. A panic in another holder does not leave the
/// plain-data state inconsistent, so poisoning is ignored.
pub(crate) fn lock(shared: &Shared) -> MutexGuard<'_, WorldState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clonable handle to an in-memory world.
#[derive(Clone, Debug)]
pub struct MemoryWorld {
    state: Shared,
}

impl MemoryWorld {
    /// Creates an empty world with clear-noon weather and the automatic
    /// day/night cycle enabled.
    pub fn new() -> Self {
        Self::with_weather(WeatherParameters::default())
    }

    pub fn with_weather(weather: WeatherParameters) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorldState {
                weather,
                day_night_cycle: true,
                lights: Vec::new(),
                actors: Vec::new(),
                stats: CallStats::default(),
            })),
        }
    }

    pub fn set_weather(&self, weather: WeatherParameters) {
        lock(&self.state).weather = weather;
    }

    /// Adds a street light and returns its id.
    pub fn add_light(&self, location: Location, is_on: bool) -> LightId {
        let mut state = lock(&self.state);
        let id = LightId(state.lights.len() as u32);
        state.lights.push(Light {
            id,
            location,
            is_on,
        });
        id
    }

    pub fn light(&self, id: LightId) -> Option<Light> {
        lock(&self.state).lights.iter().find(|l| l.id == id).copied()
    }

    /// Ids of all lights that are currently on, in id order.
    pub fn lights_on(&self) -> Vec<LightId> {
        lock(&self.state)
            .lights
            .iter()
            .filter(|l| l.is_on)
            .map(|l| l.id)
            .collect()
    }

    /// Spawns an actor and returns a handle to it.
    pub fn spawn(&self, spec: ActorSpec) -> MemoryActor {
        let mut state = lock(&self.state);
        let id = ActorId(state.actors.len() as u32);
        state.actors.push(spec.into_record(id));
        tracing::trace!(actor = id.0, "spawned actor");
        MemoryActor::new(id, Arc::clone(&self.state))
    }

    pub fn actor(&self, id: ActorId) -> Option<MemoryActor> {
        let exists = lock(&self.state).actor(id).is_some();
        exists.then(|| MemoryActor::new(id, Arc::clone(&self.state)))
    }

    pub fn stats(&self) -> CallStats {
        lock(&self.state).stats
    }

    pub fn reset_stats(&self) {
        lock(&self.state).stats = CallStats::default();
    }
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for MemoryWorld {
    type Actor = MemoryActor;
    type LightManager = MemoryLightManager;

    fn weather(&self) -> WeatherParameters {
        lock(&self.state).weather
    }

    fn light_manager(&self) -> MemoryLightManager {
        MemoryLightManager::new(Arc::clone(&self.state))
    }

    fn actors(&self, pattern: &str) -> Vec<MemoryActor> {
        let ids: Vec<ActorId> = lock(&self.state)
            .actors
            .iter()
            .filter(|a| matches_pattern(pattern, &a.type_id))
            .map(|a| a.id)
            .collect();

        ids.into_iter()
            .map(|id| MemoryActor::new(id, Arc::clone(&self.state)))
            .collect()
    }
}
