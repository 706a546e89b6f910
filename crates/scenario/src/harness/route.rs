//! Kinematic route following for the in-memory world.

use behavior_tree::{Behavior, Status};
use sim::{Actor, Location, MemoryActor, Vector3D};

use super::ScenarioContext;

/// Moves the ego along a polyline of waypoints at constant speed.
///
/// The in-memory world has no physics, so the ego is placed directly at its
/// new position each tick and its velocity is set to match. Returns
/// `Success` on the tick the last waypoint is reached.
pub struct FollowRoute {
    name: String,
    ego: MemoryActor,
    waypoints: Vec<Location>,
    speed: f32,
    next: usize,
}

impl FollowRoute {
    pub fn new(ego: MemoryActor, waypoints: Vec<Location>, speed: f32) -> Self {
        Self {
            name: "FollowRoute".to_string(),
            ego,
            waypoints,
            speed,
            next: 0,
        }
    }

    /// Index of the waypoint currently being driven to.
    #[inline]
    pub fn next_waypoint(&self) -> usize {
        self.next
    }
}

impl Behavior<ScenarioContext> for FollowRoute {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self, _ctx: &mut ScenarioContext) {
        self.next = 0;
    }

    fn update(&mut self, ctx: &mut ScenarioContext) -> Status {
        let Some(mut position) = self.ego.location() else {
            tracing::debug!("ego not placed yet, waiting");
            return Status::Running;
        };

        let mut budget = self.speed * ctx.delta_seconds;
        let mut heading = Vector3D::ZERO;

        while let Some(&target) = self.waypoints.get(self.next) {
            let distance = position.distance(target);
            if distance > 0.0 {
                heading = Vector3D::new(
                    (target.x - position.x) / distance,
                    (target.y - position.y) / distance,
                    (target.z - position.z) / distance,
                );
            }

            if distance <= budget {
                position = target;
                budget -= distance;
                self.next += 1;
            } else {
                position = Location::new(
                    position.x + heading.x * budget,
                    position.y + heading.y * budget,
                    position.z + heading.z * budget,
                );
                break;
            }
        }

        self.ego.set_location(position);

        if self.next >= self.waypoints.len() {
            self.ego.set_velocity(Vector3D::ZERO);
            tracing::info!(tick = ctx.tick, "route completed");
            Status::Success
        } else {
            self.ego.set_velocity(Vector3D::new(
                heading.x * self.speed,
                heading.y * self.speed,
                heading.z * self.speed,
            ));
            Status::Running
        }
    }
}
