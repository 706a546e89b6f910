use super::{ActorRecord, Shared, lock};
use crate::{Actor, ActorId, Location, Vector3D, VehicleLightState};

/// Spawn parameters for [`MemoryWorld::spawn`](super::MemoryWorld::spawn).
#[derive(Clone, Debug)]
pub struct ActorSpec {
    type_id: String,
    attributes: Vec<(String, String)>,
    location: Option<Location>,
    velocity: Vector3D,
    light_state: VehicleLightState,
}

impl ActorSpec {
    /// An actor of the given blueprint type, not yet placed in the world.
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            attributes: Vec::new(),
            location: None,
            velocity: Vector3D::ZERO,
            light_state: VehicleLightState::empty(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Shorthand for the `role_name` attribute.
    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.with_attribute("role_name", role)
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3D) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_light_state(mut self, state: VehicleLightState) -> Self {
        self.light_state = state;
        self
    }

    pub(crate) fn into_record(self, id: ActorId) -> ActorRecord {
        ActorRecord {
            id,
            type_id: self.type_id,
            attributes: self.attributes,
            location: self.location,
            velocity: self.velocity,
            light_state: self.light_state,
        }
    }
}

/// Actor handle of a [`MemoryWorld`](super::MemoryWorld).
#[derive(Clone, Debug)]
pub struct MemoryActor {
    id: ActorId,
    state: Shared,
}

impl MemoryActor {
    pub(crate) fn new(id: ActorId, state: Shared) -> Self {
        Self { id, state }
    }

    fn read<T>(&self, f: impl FnOnce(&ActorRecord) -> T) -> Option<T> {
        lock(&self.state).actor(self.id).map(f)
    }

    fn write(&self, f: impl FnOnce(&mut ActorRecord)) {
        if let Some(record) = lock(&self.state).actor_mut(self.id) {
            f(record);
        }
    }

    /// Places (or moves) the actor.
    pub fn set_location(&self, location: Location) {
        self.write(|a| a.location = Some(location));
    }

    /// Removes the actor from the world's spatial index, as before spawning.
    pub fn clear_location(&self) {
        self.write(|a| a.location = None);
    }

    pub fn set_velocity(&self, velocity: Vector3D) {
        self.write(|a| a.velocity = velocity);
    }
}

impl Actor for MemoryActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn type_id(&self) -> String {
        self.read(|a| a.type_id.clone()).unwrap_or_default()
    }

    fn location(&self) -> Option<Location> {
        self.read(|a| a.location).flatten()
    }

    fn velocity(&self) -> Vector3D {
        self.read(|a| a.velocity).unwrap_or_default()
    }

    fn light_state(&self) -> VehicleLightState {
        self.read(|a| a.light_state).unwrap_or_default()
    }

    fn set_light_state(&self, state: VehicleLightState) {
        self.write(|a| a.light_state = state);
    }

    fn attribute(&self, key: &str) -> Option<String> {
        self.read(|a| {
            a.attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .flatten()
    }
}
