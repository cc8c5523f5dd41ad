//! Mutable state of one zombie.

use arrayvec::ArrayVec;

use super::{AgentSnapshot, BoundingBox, Position, within_radius};
use crate::config::GameConfig;
use crate::error::GameError;

/// Animation strip currently playing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationState {
    #[default]
    #[strum(serialize = "Idle")]
    Idle,
    #[strum(serialize = "Walk")]
    Walking,
}

/// What the zombie did during the most recent tick.
///
/// Reset to `Idle` before each evaluation and set by whichever motion
/// action runs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    #[default]
    Idle,
    Chasing,
    Fleeing,
    Wandering,
    Patrolling,
}

impl Activity {
    /// Whether the zombie moves while doing this.
    pub const fn is_motion(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Upper bound on patrol waypoints.
pub const MAX_PATROL_POINTS: usize = 16;

const DEFAULT_PATROL_ROUTE: [(f64, f64); 8] = [
    (43.0, 274.0),
    (1118.0, 274.0),
    (1050.0, 494.0),
    (575.0, 804.0),
    (235.0, 991.0),
    (575.0, 804.0),
    (1050.0, 494.0),
    (1118.0, 274.0),
];

/// Position, heading, animation and bookkeeping of a single zombie.
#[derive(Clone, Debug, PartialEq)]
pub struct ZombieState {
    pub position: Position,
    /// Radians.
    pub heading: f64,
    animation: AnimationState,
    activity: Activity,
    /// Continuous frame index in `[0, FRAME_COUNT)`.
    frame: f64,
    score: u32,
    /// Current movement target.
    target: Position,
    /// Point the zombie is committed to walking to, kept until reached.
    destination: Option<Position>,
    patrol: ArrayVec<Position, MAX_PATROL_POINTS>,
    patrol_cursor: usize,
}

impl ZombieState {
    /// Movement target before the first wander point is chosen.
    pub const INITIAL_TARGET: Position = Position::new(1000.0, 1000.0);

    pub fn new(position: Position, frame: f64) -> Self {
        Self {
            position,
            heading: 0.0,
            animation: AnimationState::Idle,
            activity: Activity::Idle,
            frame: wrap_frame(frame),
            score: 0,
            target: Self::INITIAL_TARGET,
            destination: None,
            patrol: DEFAULT_PATROL_ROUTE
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
            patrol_cursor: 0,
        }
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn frame(&self) -> f64 {
        self.frame
    }

    /// Integer frame to draw.
    pub fn frame_index(&self) -> usize {
        (self.frame as usize).min(GameConfig::FRAME_COUNT - 1)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    /// The committed destination, unless the zombie is already within
    /// `arrival_m` meters of it.
    pub fn pending_destination(&self, arrival_m: f64, pixel_per_meter: f64) -> Option<Position> {
        self.destination
            .filter(|point| !self.is_within(*point, arrival_m, pixel_per_meter))
    }

    pub fn patrol_route(&self) -> &[Position] {
        &self.patrol
    }

    pub fn patrol_cursor(&self) -> usize {
        self.patrol_cursor
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Advances the animation phase by `frame_rate * elapsed`, wrapping at
    /// the frame count.
    pub fn advance_frame(&mut self, elapsed: f64, frame_rate: f64) {
        self.frame = wrap_frame(self.frame + frame_rate * elapsed);
    }

    /// Clears the activity before the policy runs; the motion action that
    /// runs this tick sets it again.
    pub fn begin_evaluation(&mut self) {
        self.set_activity(Activity::Idle);
    }

    /// Records what the zombie is doing and derives the animation from it.
    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
        self.animation = if activity.is_motion() {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        };
    }

    // ========================================================================
    // Motion & sensing
    // ========================================================================

    /// Turns toward `toward` and moves `speed_pps * elapsed` pixels along
    /// the new heading.
    ///
    /// The step is not clamped; it may overshoot. Nothing is mutated when
    /// `toward` is not finite.
    pub fn move_step(
        &mut self,
        toward: Position,
        speed_pps: f64,
        elapsed: f64,
    ) -> Result<(), GameError> {
        if !toward.is_finite() {
            return Err(GameError::NonFiniteCoordinate {
                what: "movement target",
                x: toward.x,
                y: toward.y,
            });
        }
        self.heading = self.position.heading_to(toward);
        self.position = self.position.advanced(speed_pps * elapsed, self.heading);
        self.animation = AnimationState::Walking;
        Ok(())
    }

    /// Whether `other` is at most `radius_m` meters away.
    pub fn is_within(&self, other: Position, radius_m: f64, pixel_per_meter: f64) -> bool {
        within_radius(other, self.position, radius_m, pixel_per_meter)
    }

    /// Makes `point` both the movement target and the committed destination.
    pub fn set_destination(&mut self, point: Position) {
        self.target = point;
        self.destination = Some(point);
    }

    /// Replaces the movement target and commits to it as the destination.
    ///
    /// Both coordinates must be present and finite.
    pub fn set_target_point(&mut self, x: Option<f64>, y: Option<f64>) -> Result<(), GameError> {
        let (Some(x), Some(y)) = (x, y) else {
            return Err(GameError::InvalidArgument {
                argument: if x.is_none() { "x" } else { "y" },
                reason: "location should be given",
            });
        };
        let target = Position::new(x, y);
        if !target.is_finite() {
            return Err(GameError::InvalidArgument {
                argument: "target",
                reason: "coordinates must be finite",
            });
        }
        self.set_destination(target);
        Ok(())
    }

    /// Sets the movement target to the waypoint under the cursor and moves
    /// the cursor on, wrapping at the end of the route.
    pub fn next_patrol_point(&mut self) -> Position {
        let point = self.patrol[self.patrol_cursor];
        self.set_destination(point);
        self.patrol_cursor = (self.patrol_cursor + 1) % self.patrol.len();
        point
    }

    /// Replaces the patrol route and rewinds the cursor.
    pub fn set_patrol_route(
        &mut self,
        route: impl IntoIterator<Item = Position>,
    ) -> Result<(), GameError> {
        let mut patrol = ArrayVec::new();
        for point in route {
            if !point.is_finite() {
                return Err(GameError::InvalidArgument {
                    argument: "route",
                    reason: "waypoints must be finite",
                });
            }
            patrol.try_push(point).map_err(|_| GameError::InvalidArgument {
                argument: "route",
                reason: "too many waypoints",
            })?;
        }
        if patrol.is_empty() {
            return Err(GameError::InvalidArgument {
                argument: "route",
                reason: "route needs at least one waypoint",
            });
        }
        self.patrol = patrol;
        self.patrol_cursor = 0;
        Ok(())
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    pub fn on_score_event(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Scores when `group` is the scoring collision tag; other tags are
    /// ignored. Returns whether the score changed.
    pub fn handle_collision(&mut self, group: &str) -> bool {
        if group == GameConfig::SCORE_COLLISION_GROUP {
            self.on_score_event();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn bounding_box(&self, half_extent: f64) -> BoundingBox {
        BoundingBox::around(self.position, half_extent)
    }

    pub fn snapshot(&self, config: &GameConfig) -> AgentSnapshot {
        AgentSnapshot {
            position: self.position,
            heading: self.heading,
            animation: self.animation,
            frame: self.frame_index(),
            score: self.score,
            target: self.target,
            activity: self.activity,
            facing_left: self.heading.cos() < 0.0,
            bounds: self.bounding_box(config.half_extent),
        }
    }
}

fn wrap_frame(frame: f64) -> f64 {
    let count = GameConfig::FRAME_COUNT as f64;
    let wrapped = frame.rem_euclid(count);
    // rem_euclid can round up to `count` for tiny negative inputs
    if wrapped >= count { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zombie_at(x: f64, y: f64) -> ZombieState {
        ZombieState::new(Position::new(x, y), 0.0)
    }

    #[test]
    fn move_step_heads_straight_at_the_point() {
        let config = GameConfig::default();
        let mut zombie = zombie_at(0.0, 0.0);

        zombie
            .move_step(Position::new(100.0, 0.0), config.run_speed_pps(), 0.1)
            .unwrap();

        assert_eq!(zombie.heading, 0.0);
        assert!((zombie.position.x - config.run_speed_pps() * 0.1).abs() < 1e-9);
        assert!(zombie.position.y.abs() < 1e-9);
        assert_eq!(zombie.animation(), AnimationState::Walking);
    }

    #[test]
    fn move_step_with_zero_elapsed_keeps_position() {
        let mut zombie = zombie_at(12.5, -3.0);

        zombie
            .move_step(Position::new(500.0, 500.0), 92.59, 0.0)
            .unwrap();

        assert_eq!(zombie.position, Position::new(12.5, -3.0));
    }

    #[test]
    fn move_step_does_not_clamp_at_the_target() {
        let mut zombie = zombie_at(0.0, 0.0);

        zombie.move_step(Position::new(1.0, 0.0), 100.0, 1.0).unwrap();

        assert!((zombie.position.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn move_step_rejects_non_finite_target_without_mutating() {
        let mut zombie = zombie_at(5.0, 5.0);
        let before = zombie.clone();

        let err = zombie
            .move_step(Position::new(f64::NAN, 0.0), 100.0, 1.0)
            .unwrap_err();

        assert!(matches!(err, GameError::NonFiniteCoordinate { .. }));
        assert_eq!(zombie, before);
    }

    #[test]
    fn frame_wraps_within_frame_count() {
        let mut zombie = zombie_at(0.0, 0.0);
        for _ in 0..1000 {
            zombie.advance_frame(0.037, 20.0);
            assert!(zombie.frame() >= 0.0);
            assert!(zombie.frame() < GameConfig::FRAME_COUNT as f64);
        }
    }

    #[test]
    fn frame_advances_by_rate_times_elapsed() {
        let mut zombie = ZombieState::new(Position::ORIGIN, 9.0);
        zombie.advance_frame(0.1, 20.0);
        assert!((zombie.frame() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn set_target_point_requires_both_coordinates() {
        let mut zombie = zombie_at(0.0, 0.0);

        let err = zombie.set_target_point(Some(10.0), None).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidArgument { argument: "y", .. }
        ));
        let err = zombie.set_target_point(None, None).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidArgument { argument: "x", .. }
        ));
        assert_eq!(zombie.target(), ZombieState::INITIAL_TARGET);
    }

    #[test]
    fn set_target_point_accepts_zero() {
        let mut zombie = zombie_at(0.0, 0.0);
        zombie.set_target_point(Some(0.0), Some(0.0)).unwrap();
        assert_eq!(zombie.target(), Position::ORIGIN);
    }

    #[test]
    fn destination_stays_pending_until_reached() {
        let ppm = GameConfig::DEFAULT_PIXEL_PER_METER;
        let mut zombie = zombie_at(0.0, 0.0);
        assert_eq!(zombie.pending_destination(0.5, ppm), None);

        zombie.set_destination(Position::new(100.0, 0.0));
        assert_eq!(
            zombie.pending_destination(0.5, ppm),
            Some(Position::new(100.0, 0.0))
        );

        zombie.position = Position::new(95.0, 0.0);
        assert_eq!(zombie.pending_destination(0.5, ppm), None);
        assert_eq!(zombie.destination(), Some(Position::new(100.0, 0.0)));
    }

    #[test]
    fn patrol_cycles_through_waypoints() {
        let mut zombie = zombie_at(0.0, 0.0);
        let route = zombie.patrol_route().to_vec();

        for expected in route.iter().chain(route.iter().take(1)) {
            assert_eq!(zombie.next_patrol_point(), *expected);
            assert_eq!(zombie.target(), *expected);
        }
        assert_eq!(zombie.patrol_cursor(), 1);
    }

    #[test]
    fn empty_patrol_route_is_rejected() {
        let mut zombie = zombie_at(0.0, 0.0);
        assert!(zombie.set_patrol_route(Vec::new()).is_err());
        assert_eq!(zombie.patrol_route().len(), DEFAULT_PATROL_ROUTE.len());
    }

    #[test]
    fn only_scoring_group_increments_score() {
        let mut zombie = zombie_at(0.0, 0.0);

        assert!(zombie.handle_collision("zombie:ball"));
        assert!(!zombie.handle_collision("boy:zombie"));
        zombie.on_score_event();

        assert_eq!(zombie.score(), 2);
    }

    #[test]
    fn activity_drives_animation() {
        let mut zombie = zombie_at(0.0, 0.0);

        zombie.set_activity(Activity::Fleeing);
        assert_eq!(zombie.animation(), AnimationState::Walking);

        zombie.begin_evaluation();
        assert_eq!(zombie.activity(), Activity::Idle);
        assert_eq!(zombie.animation(), AnimationState::Idle);
    }

    #[test]
    fn snapshot_flips_sprite_when_heading_left() {
        let config = GameConfig::default();
        let mut zombie = zombie_at(500.0, 500.0);
        zombie
            .move_step(Position::new(0.0, 500.0), config.run_speed_pps(), 0.01)
            .unwrap();

        let snapshot = zombie.snapshot(&config);

        assert!(snapshot.facing_left);
        assert_eq!(snapshot.animation_name(), "Walk");
        assert!((snapshot.bounds.right - snapshot.bounds.left - 100.0).abs() < 1e-9);
    }
}
