use behavior_tree::builder::node;
use behavior_tree::{BehaviorTree, Phase, Status};
use scenario::{LightsConfig, RouteLightsBehavior};
use sim::{
    Actor, ActorSpec, LightManager, Location, MemoryActor, MemoryWorld, Vector3D,
    VehicleLightState, WeatherParameters, World,
};

const NOON: WeatherParameters = WeatherParameters::CLEAR_NOON;
const NIGHT: WeatherParameters = WeatherParameters::CLEAR_NIGHT;

fn at_x(x: f32) -> Location {
    Location::new(x, 0.0, 0.0)
}

fn world_with_ego(weather: WeatherParameters) -> (MemoryWorld, MemoryActor) {
    let world = MemoryWorld::with_weather(weather);
    let ego = world.spawn(
        ActorSpec::new("vehicle.lincoln.mkz_2017")
            .with_role("hero")
            .at(Location::ORIGIN),
    );
    (world, ego)
}

fn lights_tree(world: &MemoryWorld, ego: &MemoryActor, radius: f32) -> BehaviorTree<()> {
    BehaviorTree::new(node(RouteLightsBehavior::new(world.clone(), ego.clone(), radius)))
}

#[test]
fn entering_night_turns_on_only_lights_within_radius() {
    let (world, ego) = world_with_ego(NIGHT);
    let near = world.add_light(at_x(10.0), false);
    let edge = world.add_light(at_x(50.0), false);
    let far = world.add_light(at_x(60.0), false);
    let mut tree = lights_tree(&world, &ego, 50.0);

    assert_eq!(tree.tick(&mut ()), Status::Running);

    assert_eq!(world.lights_on(), vec![near, edge]);
    assert!(!world.light(far).unwrap().is_on);

    // One batched call for both lights, nothing to switch off
    let stats = world.stats();
    assert_eq!(stats.turn_on_calls, 1);
    assert_eq!(stats.lights_switched_on, 2);
    assert_eq!(stats.turn_off_calls, 0);
}

#[test]
fn far_lights_left_on_are_switched_off_at_night() {
    let (world, ego) = world_with_ego(NIGHT);
    let far_on = world.add_light(at_x(300.0), true);
    let near_on = world.add_light(at_x(5.0), true);
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());

    assert_eq!(world.lights_on(), vec![near_on]);
    assert!(!world.light(far_on).unwrap().is_on);
    // The near light was already on: no turn_on needed
    assert_eq!(world.stats().turn_on_calls, 0);
    assert_eq!(world.stats().turn_off_calls, 1);
}

#[test]
fn leaving_night_turns_everything_off_once() {
    let (world, ego) = world_with_ego(NIGHT);
    world.add_light(at_x(10.0), false);
    let scenario_car = world.spawn(
        ActorSpec::new("vehicle.audi.a2")
            .with_role("scenario")
            .at(at_x(20.0)),
    );
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());
    assert_eq!(scenario_car.light_state(), VehicleLightState::NIGHT_DRIVING);
    assert_eq!(ego.light_state(), VehicleLightState::NIGHT_DRIVING);

    // Someone else lights a far lamp; day must switch it off too
    let remote = world.add_light(at_x(10_000.0), false);
    world.light_manager().turn_on(&[remote]);
    world.reset_stats();

    world.set_weather(NOON);
    tree.tick(&mut ());

    assert!(world.lights_on().is_empty());
    assert_eq!(world.stats().turn_off_calls, 1);
    assert_eq!(world.stats().lights_switched_off, 2);
    assert_eq!(scenario_car.light_state(), VehicleLightState::empty());
    assert_eq!(ego.light_state(), VehicleLightState::empty());

    // Steady day: no further side effects
    tree.tick(&mut ());
    tree.tick(&mut ());
    assert_eq!(world.stats().switch_calls(), 1);
}

#[test]
fn daylight_from_the_start_touches_nothing() {
    let (world, ego) = world_with_ego(NOON);
    world.add_light(at_x(10.0), true);
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());

    assert_eq!(world.stats(), Default::default());
    assert_eq!(world.lights_on().len(), 1);
    assert_eq!(ego.light_state(), VehicleLightState::empty());
}

#[test]
fn fast_ego_lights_a_wider_area() {
    let (world, ego) = world_with_ego(NIGHT);
    ego.set_velocity(Vector3D::new(0.0, 20.0, 0.0));
    let inside = world.add_light(at_x(99.0), false);
    let outside = world.add_light(at_x(101.0), false);
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());

    assert!(world.light(inside).unwrap().is_on);
    assert!(!world.light(outside).unwrap().is_on);
}

#[test]
fn steady_night_recomputes_around_new_position() {
    let (world, ego) = world_with_ego(NIGHT);
    let start = world.add_light(at_x(0.0), false);
    let ahead = world.add_light(at_x(200.0), false);
    let car = world.spawn(
        ActorSpec::new("vehicle.tesla.model3")
            .with_role("scenario")
            .at(at_x(190.0)),
    );
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());
    assert_eq!(world.lights_on(), vec![start]);
    assert_eq!(car.light_state(), VehicleLightState::empty());

    ego.set_location(at_x(200.0));
    tree.tick(&mut ());

    assert_eq!(world.lights_on(), vec![ahead]);
    assert_eq!(car.light_state(), VehicleLightState::NIGHT_DRIVING);
}

#[test]
fn steady_night_refreshes_vehicle_lights_every_tick() {
    let (world, ego) = world_with_ego(NIGHT);
    let mut tree = lights_tree(&world, &ego, 50.0);

    tree.tick(&mut ());
    ego.set_light_state(VehicleLightState::empty());
    tree.tick(&mut ());

    assert_eq!(ego.light_state(), VehicleLightState::NIGHT_DRIVING);
}

#[test]
fn missing_location_skips_the_tick() {
    let (world, ego) = world_with_ego(NIGHT);
    ego.clear_location();
    let light = world.add_light(at_x(10.0), false);
    let mut tree = lights_tree(&world, &ego, 50.0);

    assert_eq!(tree.tick(&mut ()), Status::Running);
    assert_eq!(world.stats().switch_calls(), 0);
    assert_eq!(ego.light_state(), VehicleLightState::empty());

    // Once the ego is placed the next tick acts normally
    ego.set_location(Location::ORIGIN);
    tree.tick(&mut ());
    assert!(world.light(light).unwrap().is_on);
}

#[test]
fn missing_location_does_not_consume_the_night_to_day_edge() {
    let (world, ego) = world_with_ego(NIGHT);
    world.add_light(at_x(10.0), false);
    let mut tree = lights_tree(&world, &ego, 50.0);
    tree.tick(&mut ());

    world.set_weather(NOON);
    ego.clear_location();
    tree.tick(&mut ());
    assert_eq!(world.lights_on().len(), 1);

    ego.set_location(Location::ORIGIN);
    tree.tick(&mut ());
    assert!(world.lights_on().is_empty());
}

#[test]
fn lifecycle_hands_control_back_on_interrupt() {
    let (world, ego) = world_with_ego(NOON);
    let mut tree = lights_tree(&world, &ego, 50.0);

    // Constructed: automatic cycle already off
    assert!(!world.light_manager().is_day_night_cycle_active());
    assert_eq!(tree.phase(), Phase::Constructed);

    tree.tick(&mut ());
    assert_eq!(tree.phase(), Phase::Active);

    tree.interrupt(&mut ());
    assert_eq!(tree.phase(), Phase::Terminated);
    assert!(world.light_manager().is_day_night_cycle_active());
}

#[test]
fn custom_role_and_thresholds_are_honoured() {
    let (world, ego) = world_with_ego(NOON.with_fog_density(30.0));
    let convoy = world.spawn(
        ActorSpec::new("vehicle.carlamotors.firetruck")
            .with_role("convoy")
            .at(at_x(5.0)),
    );
    let mut config = LightsConfig::with_radius(20.0);
    config.scenario_role = "convoy".to_string();
    config.thresholds.fog_density = 25.0;
    let mut tree: BehaviorTree<()> = BehaviorTree::new(node(
        RouteLightsBehavior::with_config(world.clone(), ego.clone(), &config).named("ConvoyLights"),
    ));

    tree.tick(&mut ());

    assert_eq!(convoy.light_state(), VehicleLightState::NIGHT_DRIVING);
}
