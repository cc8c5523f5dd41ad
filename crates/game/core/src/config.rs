//! Game configuration constants and tunable parameters.

use crate::error::GameError;
use crate::state::WorldBounds;

/// Tunable parameters shared by motion, sensing and the decision policy.
///
/// Distances the policy reasons about are expressed in meters and converted
/// to pixels through [`GameConfig::pixel_per_meter`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Pixels per simulated meter (10 px per 30 cm).
    pub pixel_per_meter: f64,
    /// Zombie run speed in km/h.
    pub run_speed_kmph: f64,
    /// Seconds one animation cycle takes.
    pub time_per_action: f64,
    /// Radius within which the target counts as nearby (meters).
    pub sensing_radius_m: f64,
    /// Radius within which a movement target counts as reached (meters).
    pub arrival_radius_m: f64,
    /// Distance a fleeing zombie must open up before it stops fleeing (meters).
    pub flee_clearance_m: f64,
    /// Rectangle the world is drawn in.
    pub world: WorldBounds,
    /// Inset from the world edge for spawn and wander points (pixels).
    pub spawn_margin: f64,
    /// Half of the zombie's drawn size (pixels).
    pub half_extent: f64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of frames in every animation strip.
    pub const FRAME_COUNT: usize = 10;
    /// Frames advanced per animation cycle.
    pub const FRAMES_PER_ACTION: f64 = Self::FRAME_COUNT as f64;
    /// Collision group whose events increment the zombie's score.
    pub const SCORE_COLLISION_GROUP: &'static str = "zombie:ball";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PIXEL_PER_METER: f64 = 10.0 / 0.3;
    pub const DEFAULT_RUN_SPEED_KMPH: f64 = 10.0;
    pub const DEFAULT_TIME_PER_ACTION: f64 = 0.5;
    pub const DEFAULT_SENSING_RADIUS_M: f64 = 7.0;
    pub const DEFAULT_ARRIVAL_RADIUS_M: f64 = 0.5;
    pub const DEFAULT_FLEE_CLEARANCE_M: f64 = 7.0;
    pub const DEFAULT_SPAWN_MARGIN: f64 = 100.0;
    pub const DEFAULT_HALF_EXTENT: f64 = 50.0;

    pub fn new() -> Self {
        Self {
            pixel_per_meter: Self::DEFAULT_PIXEL_PER_METER,
            run_speed_kmph: Self::DEFAULT_RUN_SPEED_KMPH,
            time_per_action: Self::DEFAULT_TIME_PER_ACTION,
            sensing_radius_m: Self::DEFAULT_SENSING_RADIUS_M,
            arrival_radius_m: Self::DEFAULT_ARRIVAL_RADIUS_M,
            flee_clearance_m: Self::DEFAULT_FLEE_CLEARANCE_M,
            world: WorldBounds::default(),
            spawn_margin: Self::DEFAULT_SPAWN_MARGIN,
            half_extent: Self::DEFAULT_HALF_EXTENT,
        }
    }

    /// Run speed in pixels per simulated second.
    pub fn run_speed_pps(&self) -> f64 {
        let meters_per_minute = self.run_speed_kmph * 1000.0 / 60.0;
        let meters_per_second = meters_per_minute / 60.0;
        meters_per_second * self.pixel_per_meter
    }

    /// Animation cycles per second.
    pub fn action_per_time(&self) -> f64 {
        1.0 / self.time_per_action
    }

    /// Frames advanced per simulated second.
    pub fn frame_rate(&self) -> f64 {
        Self::FRAMES_PER_ACTION * self.action_per_time()
    }

    pub fn meters_to_pixels(&self, meters: f64) -> f64 {
        meters * self.pixel_per_meter
    }

    /// Region spawn and wander points are drawn from.
    pub fn walkable(&self) -> WorldBounds {
        self.world.inset(self.spawn_margin)
    }

    /// Rejects configurations the motion and sensing math cannot work with.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("pixel_per_meter", self.pixel_per_meter),
            ("run_speed_kmph", self.run_speed_kmph),
            ("time_per_action", self.time_per_action),
            ("sensing_radius_m", self.sensing_radius_m),
            ("arrival_radius_m", self.arrival_radius_m),
            ("flee_clearance_m", self.flee_clearance_m),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }
        if !self.world.is_valid() {
            return Err(GameError::InvalidConfig {
                field: "world",
                reason: "bounds must be finite with min < max",
            });
        }
        if !(self.half_extent.is_finite() && self.half_extent >= 0.0) {
            return Err(GameError::InvalidConfig {
                field: "half_extent",
                reason: "must be a non-negative finite number",
            });
        }
        if !(self.spawn_margin >= self.half_extent) {
            return Err(GameError::InvalidConfig {
                field: "spawn_margin",
                reason: "must be at least the half extent",
            });
        }
        if !self.walkable().is_valid() {
            return Err(GameError::InvalidConfig {
                field: "spawn_margin",
                reason: "leaves no walkable area inside the world",
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_speed_matches_ten_kmph() {
        let config = GameConfig::default();
        // 10 km/h = 2.777.. m/s, at 33.3.. px/m
        let expected = 10_000.0 / 3600.0 * (10.0 / 0.3);
        assert!((config.run_speed_pps() - expected).abs() < 1e-9);
    }

    #[test]
    fn frame_rate_is_twenty_frames_per_second() {
        let config = GameConfig::default();
        assert!((config.frame_rate() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn default_walkable_area_matches_spawn_range() {
        let walkable = GameConfig::default().walkable();
        assert_eq!(walkable, WorldBounds::new(100.0, 100.0, 1180.0, 924.0));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn margin_smaller_than_half_extent_is_rejected() {
        let config = GameConfig {
            spawn_margin: 10.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig {
                field: "spawn_margin",
                ..
            })
        ));
    }

    #[test]
    fn zero_speed_is_rejected() {
        let config = GameConfig {
            run_speed_kmph: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"run_speed_kmph": 20.0}"#).unwrap();
        assert_eq!(config.run_speed_kmph, 20.0);
        assert_eq!(config.world, WorldBounds::default());
        assert_eq!(config.sensing_radius_m, GameConfig::DEFAULT_SENSING_RADIUS_M);
    }
}
