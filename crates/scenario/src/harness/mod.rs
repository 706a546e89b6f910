//! End-to-end harness: drives the ego along a route under a changing sun
//! with [`RouteLightsBehavior`] running next to it.
//!
//! The scenario tree is
//!
//! ```text
//! Parallel(SuccessOnOne) "RouteScenario"
//! ├── FollowRoute
//! └── RouteLightsBehavior
//! ```
//!
//! so the route completing ends the scenario and the lights behavior is
//! terminated, which hands lighting back to the day/night cycle.

pub mod file;
pub mod route;

use behavior_tree::builder::{node, parallel};
use behavior_tree::{BehaviorTree, ParallelPolicy, Status};
use sim::{CallStats, LightManager, World};

pub use file::{Scenario, ScenarioFile, SunSchedule};
pub use route::FollowRoute;

use crate::config::Config;
use crate::errors::Result;
use crate::lights::RouteLightsBehavior;

/// Blackboard shared by all behaviors of a harness run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioContext {
    /// Index of the tick being executed.
    pub tick: u64,
    /// Simulated seconds per tick.
    pub delta_seconds: f32,
}

impl ScenarioContext {
    pub fn new(delta_seconds: f32) -> Self {
        Self {
            tick: 0,
            delta_seconds,
        }
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.tick as f32 * self.delta_seconds
    }
}

/// Outcome of [`run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Final status of the scenario tree; `Invalid` if the tick limit hit.
    pub status: Status,
    pub ticks: u64,
    /// Ticks during which the weather called for night mode.
    pub night_ticks: u64,
    /// Street lights left on when the run ended.
    pub lights_on: usize,
    pub stats: CallStats,
    pub day_night_cycle_restored: bool,
}

/// Ticks `scenario` until the route completes or the tick limit is reached.
///
/// Lights settings embedded in the scenario file win over `config.lights`.
pub fn run(scenario: &Scenario, config: &Config) -> Result<RunReport> {
    let lights_config = scenario.behavior.as_ref().unwrap_or(&config.lights);
    lights_config.validate()?;
    config.harness.validate()?;

    let route = FollowRoute::new(scenario.ego.clone(), scenario.route.clone(), scenario.ego_speed);
    let lights = RouteLightsBehavior::with_config(
        scenario.world.clone(),
        scenario.ego.clone(),
        lights_config,
    );
    let mut tree = BehaviorTree::new(parallel(
        "RouteScenario",
        ParallelPolicy::SuccessOnOne,
        vec![node(route), node(lights)],
    ));

    let mut ctx = ScenarioContext::new(config.harness.delta_seconds);
    let mut status = Status::Running;
    let mut night_ticks = 0;

    while ctx.tick < config.harness.max_ticks {
        scenario.advance(ctx.tick);
        if lights_config.thresholds.is_night(&scenario.world.weather()) {
            night_ticks += 1;
        }

        status = tree.tick(&mut ctx);
        ctx.tick += 1;

        if status.is_complete() {
            break;
        }
    }

    if !status.is_complete() {
        tracing::warn!(
            max_ticks = config.harness.max_ticks,
            "tick limit reached before the route completed, interrupting"
        );
        tree.interrupt(&mut ctx);
        status = Status::Invalid;
    }

    let report = RunReport {
        status,
        ticks: tree.tick_count(),
        night_ticks,
        lights_on: scenario.world.lights_on().len(),
        stats: scenario.world.stats(),
        day_night_cycle_restored: scenario.world.light_manager().is_day_night_cycle_active(),
    };
    tracing::info!(
        status = %report.status,
        ticks = report.ticks,
        elapsed_s = ctx.elapsed_seconds(),
        night_ticks = report.night_ticks,
        "scenario finished"
    );
    Ok(report)
}
