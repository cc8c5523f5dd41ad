//! Blackboard the zombie's behavior tree is evaluated against.
//!
//! The [`ZombieContext`] is owned by the zombie and lives as long as it does.
//! Before every tick the driver refreshes the per-tick inputs (target
//! snapshot, elapsed time); the tree's leaves then read sensing data from it
//! and write motion back into [`ZombieState`].

use std::sync::Arc;

use game_core::{
    Activity, GameConfig, GameError, PcgStream, Position, TargetSnapshot, ZombieState,
    within_radius,
};

/// Context for zombie decision-making.
///
/// # Design
///
/// 1. **Agent State**: the zombie's own position, heading, score and target
/// 2. **Target Snapshot**: the target entity as it was when the tick began;
///    the zombie never writes to it
/// 3. **Configuration**: shared, immutable tunables
/// 4. **Randomness**: the zombie's private deterministic stream
pub struct ZombieContext {
    /// The zombie being driven.
    pub state: ZombieState,

    /// Target entity position and score for the current tick.
    pub target: TargetSnapshot,

    /// Shared simulation tunables.
    pub config: Arc<GameConfig>,

    /// Random draws for wander points.
    pub rng: PcgStream,

    /// Seconds simulated by the current tick.
    pub elapsed: f64,
}

impl ZombieContext {
    /// Creates a context with no target seen yet and zero elapsed time.
    pub fn new(state: ZombieState, config: Arc<GameConfig>, rng: PcgStream) -> Self {
        Self {
            state,
            target: TargetSnapshot::default(),
            config,
            rng,
            elapsed: 0.0,
        }
    }

    /// Refreshes the per-tick inputs.
    pub fn prepare(&mut self, target: TargetSnapshot, elapsed: f64) {
        self.target = target;
        self.elapsed = elapsed;
    }

    // ========================================================================
    // Sensing
    // ========================================================================

    /// Target position, rejected if it is not a usable coordinate.
    pub fn target_position(&self) -> Result<Position, GameError> {
        let position = self.target.position;
        if position.is_finite() {
            Ok(position)
        } else {
            Err(GameError::NonFiniteCoordinate {
                what: "target entity",
                x: position.x,
                y: position.y,
            })
        }
    }

    /// Whether the target is at most `radius_m` meters from the zombie.
    pub fn is_target_within(&self, radius_m: f64) -> Result<bool, GameError> {
        let target = self.target_position()?;
        Ok(within_radius(
            target,
            self.state.position,
            radius_m,
            self.config.pixel_per_meter,
        ))
    }

    /// Whether `point` is at most `radius_m` meters from the zombie.
    pub fn is_point_within(&self, point: Position, radius_m: f64) -> bool {
        self.state
            .is_within(point, radius_m, self.config.pixel_per_meter)
    }

    /// The committed destination, unless the zombie has already reached it.
    ///
    /// Reached means within `arrival_radius_m`, or within one step at this
    /// tick's elapsed time if that is larger. Steps are not clamped, so a
    /// step longer than the arrival diameter hops across the point instead of
    /// landing inside the radius.
    pub fn pending_destination(&self, arrival_radius_m: f64) -> Option<Position> {
        let step_m = self.config.run_speed_pps() * self.elapsed / self.config.pixel_per_meter;
        self.state
            .pending_destination(arrival_radius_m.max(step_m), self.config.pixel_per_meter)
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Takes one run-speed step toward `point` and records `activity`.
    pub fn step_toward(&mut self, point: Position, activity: Activity) -> Result<(), GameError> {
        self.state
            .move_step(point, self.config.run_speed_pps(), self.elapsed)?;
        self.state.set_activity(activity);
        Ok(())
    }

    /// Uniformly samples a point inside the walkable part of the world.
    pub fn random_walkable_point(&mut self) -> Position {
        let area = self.config.walkable();
        let x = self.rng.range_f64(area.min_x, area.max_x);
        let y = self.rng.range_f64(area.min_y, area.max_y);
        Position::new(x, y)
    }
}
