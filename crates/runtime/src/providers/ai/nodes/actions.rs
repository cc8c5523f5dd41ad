//! Action nodes for zombie behavior trees.
//!
//! Motion actions take one run-speed step per tick and report `Running`
//! until their goal holds, then `Success`. The goal is checked after the
//! step. Point-choosing actions finish immediately.

use behavior_tree::{LeafResult, Status, Task};
use game_core::Activity;

use crate::providers::ai::ZombieContext;

/// Walks toward the zombie's current movement target.
///
/// Succeeds once the zombie is within `arrival_radius_m` of it.
pub struct MoveToTarget {
    /// Arrival radius in meters.
    pub arrival_radius_m: f64,
    /// Activity reported while walking.
    pub activity: Activity,
}

impl Task<ZombieContext> for MoveToTarget {
    fn run(&self, ctx: &mut ZombieContext) -> LeafResult<Status> {
        let point = ctx.state.target();
        ctx.step_toward(point, self.activity)?;
        Ok(Status::from(ctx.is_point_within(point, self.arrival_radius_m)).or_running())
    }
}

/// Chases the target entity.
///
/// Succeeds once the zombie is within `arrival_radius_m` of where the target
/// stood this tick. A target that outruns the zombie keeps this `Running`
/// indefinitely.
pub struct ChaseTarget {
    /// Arrival radius in meters.
    pub arrival_radius_m: f64,
}

impl Task<ZombieContext> for ChaseTarget {
    fn run(&self, ctx: &mut ZombieContext) -> LeafResult<Status> {
        let target = ctx.target_position()?;
        ctx.step_toward(target, Activity::Chasing)?;
        Ok(Status::from(ctx.is_target_within(self.arrival_radius_m)?).or_running())
    }
}

/// Runs directly away from the target entity.
///
/// Steps toward the zombie's position mirrored through the target, and
/// succeeds once the target is farther than `clearance_m`.
pub struct FleeFromTarget {
    /// Clearance in meters.
    pub clearance_m: f64,
}

impl Task<ZombieContext> for FleeFromTarget {
    fn run(&self, ctx: &mut ZombieContext) -> LeafResult<Status> {
        let target = ctx.target_position()?;
        let escape = ctx.state.position.mirrored_away_from(target);
        ctx.step_toward(escape, Activity::Fleeing)?;
        Ok(Status::from(!ctx.is_target_within(self.clearance_m)?).or_running())
    }
}

/// Chooses a random walkable point to wander to.
///
/// Always succeeds. The zombie keeps an earlier destination until it reaches
/// it (see [`ZombieContext::pending_destination`]), so the walk that follows
/// can converge; only then is a new point drawn.
pub struct PickRandomPoint {
    /// Arrival radius in meters.
    pub arrival_radius_m: f64,
}

impl Task<ZombieContext> for PickRandomPoint {
    fn run(&self, ctx: &mut ZombieContext) -> LeafResult<Status> {
        if ctx.pending_destination(self.arrival_radius_m).is_none() {
            let point = ctx.random_walkable_point();
            tracing::debug!(x = point.x, y = point.y, "picked wander point");
            ctx.state.set_destination(point);
        }
        Ok(Status::Success)
    }
}

/// Moves on to the next patrol waypoint once the current one is reached.
///
/// Always succeeds.
pub struct NextPatrolPoint {
    /// Arrival radius in meters.
    pub arrival_radius_m: f64,
}

impl Task<ZombieContext> for NextPatrolPoint {
    fn run(&self, ctx: &mut ZombieContext) -> LeafResult<Status> {
        if ctx.pending_destination(self.arrival_radius_m).is_none() {
            let point = ctx.state.next_patrol_point();
            tracing::debug!(x = point.x, y = point.y, "heading to next waypoint");
        }
        Ok(Status::Success)
    }
}

/// Maps `Failure` to `Running` for motion goals that are not met yet.
trait OrRunning {
    fn or_running(self) -> Status;
}

impl OrRunning for Status {
    fn or_running(self) -> Status {
        match self {
            Status::Failure => Status::Running,
            status => status,
        }
    }
}
