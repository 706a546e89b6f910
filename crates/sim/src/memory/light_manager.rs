use super::{Shared, lock};
use crate::{Light, LightId, LightManager};

/// Light manager handle of a [`MemoryWorld`](super::MemoryWorld).
#[derive(Clone, Debug)]
pub struct MemoryLightManager {
    state: Shared,
}

impl MemoryLightManager {
    pub(crate) fn new(state: Shared) -> Self {
        Self { state }
    }

    fn switch(&self, ids: &[LightId], on: bool) {
        let mut state = lock(&self.state);
        for light in state.lights.iter_mut().filter(|l| ids.contains(&l.id)) {
            light.is_on = on;
        }

        if on {
            state.stats.turn_on_calls += 1;
            state.stats.lights_switched_on += ids.len();
        } else {
            state.stats.turn_off_calls += 1;
            state.stats.lights_switched_off += ids.len();
        }
        tracing::trace!(count = ids.len(), on, "switched light batch");
    }
}

impl LightManager for MemoryLightManager {
    fn all_lights(&self) -> Vec<Light> {
        lock(&self.state).lights.clone()
    }

    fn turn_on(&self, lights: &[LightId]) {
        self.switch(lights, true);
    }

    fn turn_off(&self, lights: &[LightId]) {
        self.switch(lights, false);
    }

    fn set_day_night_cycle(&self, active: bool) {
        lock(&self.state).day_night_cycle = active;
    }

    fn is_day_night_cycle_active(&self) -> bool {
        lock(&self.state).day_night_cycle
    }
}

