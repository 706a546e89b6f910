//! Street and vehicle lighting around the ego vehicle.

use behavior_tree::{Behavior, Status};
use sim::{Actor, LightId, LightManager, Location, VehicleLightState, World};

use super::{NightCause, NightModeThresholds};
use crate::config::LightsConfig;

/// Turns street lights and scenario vehicle lights on around the ego when
/// the weather makes the scene dark, and everything off when it brightens.
///
/// # Lifecycle
///
/// - **Construction** takes manual control of lighting by disabling the
///   world's automatic day/night cycle, and caches the light manager.
/// - **Update** never completes: it returns `Running` every tick, so the
///   behavior lives as long as its parent keeps ticking it.
/// - **Terminate** hands lighting back to the simulator by re-enabling the
///   automatic cycle, whatever the termination reason.
///
/// # Tick
///
/// While night mode holds, every tick recomputes the full on/off partition
/// around the ego's current location (a moving ego leaves lights behind).
/// On the night → day edge all lights are switched off exactly once. During
/// day ticks nothing is touched.
pub struct RouteLightsBehavior<W: World> {
    name: String,
    world: W,
    light_manager: W::LightManager,
    ego: W::Actor,
    radius: f32,
    speed_factor: f32,
    scenario_role: String,
    vehicle_filter: String,
    thresholds: NightModeThresholds,
    vehicle_lights: VehicleLightState,
    prev_night_mode: bool,
}

impl<W: World> RouteLightsBehavior<W> {
    pub const DEFAULT_NAME: &'static str = "LightsBehavior";

    /// Creates the behavior with default settings and the given base radius.
    pub fn new(world: W, ego: W::Actor, radius: f32) -> Self {
        Self::with_config(world, ego, &LightsConfig::with_radius(radius))
    }

    pub fn with_config(world: W, ego: W::Actor, config: &LightsConfig) -> Self {
        let light_manager = world.light_manager();
        light_manager.set_day_night_cycle(false);
        tracing::info!(
            ego = ego.id().0,
            radius = config.radius,
            "took manual control of scene lighting"
        );

        Self {
            name: Self::DEFAULT_NAME.to_string(),
            world,
            light_manager,
            ego,
            radius: config.radius,
            speed_factor: config.speed_factor,
            scenario_role: config.scenario_role.clone(),
            vehicle_filter: config.vehicle_filter.clone(),
            thresholds: config.thresholds,
            vehicle_lights: VehicleLightState::NIGHT_DRIVING,
            prev_night_mode: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Night mode as decided on the last completed tick.
    #[inline]
    pub fn is_night_mode(&self) -> bool {
        self.prev_night_mode
    }

    /// Activation radius for an ego moving at `speed` m/s.
    #[inline]
    pub fn effective_radius(&self, speed: f32) -> f32 {
        self.radius.max(self.speed_factor * speed)
    }

    fn scenario_vehicles(&self) -> Vec<W::Actor> {
        self.world
            .actors(&self.vehicle_filter)
            .into_iter()
            .filter(|v| v.attribute("role_name").as_deref() == Some(self.scenario_role.as_str()))
            .collect()
    }

    fn add_vehicle_lights(&self, vehicle: &W::Actor) {
        vehicle.set_light_state(vehicle.light_state().union(self.vehicle_lights));
    }

    fn remove_vehicle_lights(&self, vehicle: &W::Actor) {
        vehicle.set_light_state(vehicle.light_state().difference(self.vehicle_lights));
    }

    fn turn_close_lights_on(&self, location: Location) {
        let radius = self.effective_radius(self.ego.speed());

        // Street lights
        let mut on_lights: Vec<LightId> = Vec::new();
        let mut off_lights: Vec<LightId> = Vec::new();
        for light in self.light_manager.all_lights() {
            let far = light.location.distance(location) > radius;
            if far && light.is_on {
                off_lights.push(light.id);
            } else if !far && !light.is_on {
                on_lights.push(light.id);
            }
        }

        // Empty batches are not sent to the simulator
        if !on_lights.is_empty() {
            self.light_manager.turn_on(&on_lights);
        }
        if !off_lights.is_empty() {
            self.light_manager.turn_off(&off_lights);
        }

        // Vehicles
        let vehicles = self.scenario_vehicles();
        for vehicle in &vehicles {
            let near = vehicle
                .location()
                .is_some_and(|l| l.distance(location) <= radius);
            if near {
                self.add_vehicle_lights(vehicle);
            } else {
                self.remove_vehicle_lights(vehicle);
            }
        }

        // Ego vehicle
        self.add_vehicle_lights(&self.ego);

        tracing::debug!(
            radius,
            switched_on = on_lights.len(),
            switched_off = off_lights.len(),
            vehicles = vehicles.len(),
            "refreshed lights around ego"
        );
    }

    fn turn_all_lights_off(&self) {
        let off_lights: Vec<LightId> = self
            .light_manager
            .all_lights()
            .into_iter()
            .filter(|l| l.is_on)
            .map(|l| l.id)
            .collect();
        // Empty batches are not sent to the simulator
        if !off_lights.is_empty() {
            self.light_manager.turn_off(&off_lights);
        }

        for vehicle in self.scenario_vehicles() {
            self.remove_vehicle_lights(&vehicle);
        }
        self.remove_vehicle_lights(&self.ego);

        tracing::debug!(switched_off = off_lights.len(), "turned all lights off");
    }
}

impl<W: World, C> Behavior<C> for RouteLightsBehavior<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self, _ctx: &mut C) {
        // Re-activation after a terminate must take control back
        if self.light_manager.is_day_night_cycle_active() {
            self.light_manager.set_day_night_cycle(false);
        }
    }

    fn update(&mut self, _ctx: &mut C) -> Status {
        let Some(location) = self.ego.location() else {
            tracing::debug!(behavior = %self.name, "ego location unavailable, skipping tick");
            return Status::Running;
        };

        let night: Option<NightCause> = self.thresholds.classify(&self.world.weather());
        match night {
            Some(cause) => {
                if !self.prev_night_mode {
                    tracing::info!(behavior = %self.name, %cause, "entering night mode");
                }
                self.turn_close_lights_on(location);
            }
            None if self.prev_night_mode => {
                tracing::info!(behavior = %self.name, "leaving night mode");
                self.turn_all_lights_off();
            }
            None => {}
        }

        self.prev_night_mode = night.is_some();
        Status::Running
    }

    fn terminate(&mut self, _ctx: &mut C, status: Status) {
        self.light_manager.set_day_night_cycle(true);
        tracing::info!(behavior = %self.name, %status, "returned lighting to day/night cycle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::{ActorSpec, MemoryActor, MemoryWorld, Vector3D, WeatherParameters};

    const NOON: WeatherParameters = WeatherParameters::CLEAR_NOON;
    const NIGHT: WeatherParameters = WeatherParameters::CLEAR_NIGHT;

    fn setup(weather: WeatherParameters) -> (MemoryWorld, MemoryActor) {
        let world = MemoryWorld::with_weather(weather);
        let ego = world.spawn(
            ActorSpec::new("vehicle.lincoln.mkz")
                .with_role("hero")
                .at(Location::ORIGIN),
        );
        (world, ego)
    }

    fn tick(behavior: &mut RouteLightsBehavior<MemoryWorld>) -> Status {
        Behavior::<()>::update(behavior, &mut ())
    }

    #[test]
    fn construction_disables_day_night_cycle() {
        let (world, ego) = setup(NOON);
        let behavior = RouteLightsBehavior::new(world.clone(), ego, 50.0);

        assert!(!world.light_manager().is_day_night_cycle_active());
        assert_eq!(Behavior::<()>::name(&behavior), "LightsBehavior");
        assert!(!behavior.is_night_mode());
    }

    #[test]
    fn terminate_restores_day_night_cycle() {
        let (world, ego) = setup(NOON);
        let mut behavior = RouteLightsBehavior::new(world.clone(), ego, 50.0);

        Behavior::<()>::terminate(&mut behavior, &mut (), Status::Invalid);
        assert!(world.light_manager().is_day_night_cycle_active());

        Behavior::<()>::initialise(&mut behavior, &mut ());
        assert!(!world.light_manager().is_day_night_cycle_active());
    }

    #[test]
    fn effective_radius_scales_with_speed() {
        let (world, ego) = setup(NOON);
        let behavior = RouteLightsBehavior::new(world, ego, 50.0);

        assert_eq!(behavior.effective_radius(0.0), 50.0);
        assert_eq!(behavior.effective_radius(5.0), 50.0);
        assert_eq!(behavior.effective_radius(20.0), 100.0);
    }

    #[test]
    fn update_always_reports_running() {
        let (world, ego) = setup(NIGHT);
        let mut behavior = RouteLightsBehavior::new(world.clone(), ego, 50.0);

        assert_eq!(tick(&mut behavior), Status::Running);
        world.set_weather(NOON);
        assert_eq!(tick(&mut behavior), Status::Running);
        assert_eq!(tick(&mut behavior), Status::Running);
    }

    #[test]
    fn night_sets_ego_lights_without_touching_other_lamps() {
        let (world, ego) = setup(NIGHT);
        ego.set_light_state(VehicleLightState::BRAKE);
        let mut behavior = RouteLightsBehavior::new(world, ego.clone(), 50.0);

        tick(&mut behavior);
        assert_eq!(
            ego.light_state(),
            VehicleLightState::BRAKE | VehicleLightState::NIGHT_DRIVING
        );
        assert!(behavior.is_night_mode());
    }

    #[test]
    fn only_scenario_role_vehicles_are_controlled() {
        let (world, ego) = setup(NIGHT);
        let near = Location::new(10.0, 0.0, 0.0);
        let scenario_car =
            world.spawn(ActorSpec::new("vehicle.audi.a2").with_role("scenario").at(near));
        let background_car =
            world.spawn(ActorSpec::new("vehicle.audi.tt").with_role("background").at(near));
        let walker =
            world.spawn(ActorSpec::new("walker.pedestrian.0001").with_role("scenario").at(near));
        let mut behavior = RouteLightsBehavior::new(world, ego, 50.0);

        tick(&mut behavior);

        assert_eq!(scenario_car.light_state(), VehicleLightState::NIGHT_DRIVING);
        assert_eq!(background_car.light_state(), VehicleLightState::empty());
        assert_eq!(walker.light_state(), VehicleLightState::empty());
    }

    #[test]
    fn far_scenario_vehicles_lose_night_lights() {
        let (world, ego) = setup(NIGHT);
        let far_car = world.spawn(
            ActorSpec::new("vehicle.audi.a2")
                .with_role("scenario")
                .at(Location::new(500.0, 0.0, 0.0))
                .with_light_state(VehicleLightState::NIGHT_DRIVING | VehicleLightState::FOG),
        );
        let mut behavior = RouteLightsBehavior::new(world, ego, 50.0);

        tick(&mut behavior);
        assert_eq!(far_car.light_state(), VehicleLightState::FOG);
    }

    #[test]
    fn nothing_to_switch_sends_no_batches() {
        let (world, ego) = setup(NIGHT);
        world.add_light(Location::new(10.0, 0.0, 0.0), true);
        world.add_light(Location::new(500.0, 0.0, 0.0), false);
        let mut behavior = RouteLightsBehavior::new(world.clone(), ego, 50.0);

        tick(&mut behavior);
        assert_eq!(world.stats().switch_calls(), 0);

        // Day with every light already off: no turn_off either
        world.light_manager().turn_off(&world.lights_on());
        world.reset_stats();
        world.set_weather(NOON);
        tick(&mut behavior);
        assert_eq!(world.stats().switch_calls(), 0);
        assert!(!behavior.is_night_mode());
    }

    #[test]
    fn speed_widens_the_lit_area() {
        let (world, ego) = setup(NIGHT);
        ego.set_velocity(Vector3D::new(20.0, 0.0, 0.0));
        let at_80 = world.add_light(Location::new(80.0, 0.0, 0.0), false);
        let at_120 = world.add_light(Location::new(120.0, 0.0, 0.0), false);
        let mut behavior = RouteLightsBehavior::new(world.clone(), ego, 50.0);

        tick(&mut behavior);
        assert_eq!(world.lights_on(), vec![at_80]);
        assert!(!world.light(at_120).unwrap().is_on);
    }
}
