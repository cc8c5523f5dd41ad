//! Condition nodes for zombie behavior trees.
//!
//! Conditions read the zombie and the target snapshot and answer yes or no.
//! They never modify state.

use behavior_tree::{LeafResult, Predicate};

use crate::providers::ai::ZombieContext;

/// Checks whether the target is within `radius_m` meters.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::builder::{condition, sequence};
///
/// sequence("Chase", vec![
///     condition("target nearby", IsTargetNearby { radius_m: 7.0 }),
///     // ...
/// ])
/// ```
pub struct IsTargetNearby {
    /// Sensing radius in meters.
    pub radius_m: f64,
}

impl Predicate<ZombieContext> for IsTargetNearby {
    fn check(&self, ctx: &ZombieContext) -> LeafResult<bool> {
        Ok(ctx.is_target_within(self.radius_m)?)
    }
}

/// Zombie holds at least as many points as the target.
pub struct ScoreAtLeastTarget;

impl Predicate<ZombieContext> for ScoreAtLeastTarget {
    fn check(&self, ctx: &ZombieContext) -> LeafResult<bool> {
        Ok(ctx.state.score() >= ctx.target.score)
    }
}

/// Zombie holds fewer points than the target.
pub struct ScoreBelowTarget;

impl Predicate<ZombieContext> for ScoreBelowTarget {
    fn check(&self, ctx: &ZombieContext) -> LeafResult<bool> {
        Ok(ctx.state.score() < ctx.target.score)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_core::{GameConfig, PcgStream, Position, TargetSnapshot, ZombieState};

    use super::*;

    fn context(target: Position, zombie_score: u32, target_score: u32) -> ZombieContext {
        let mut state = ZombieState::new(Position::ORIGIN, 0.0);
        for _ in 0..zombie_score {
            state.on_score_event();
        }
        let mut ctx = ZombieContext::new(state, Arc::new(GameConfig::default()), PcgStream::new(0, 0));
        ctx.prepare(TargetSnapshot::new(target, target_score), 0.016);
        ctx
    }

    #[test]
    fn nearby_uses_meter_radius() {
        let seven_meters = GameConfig::DEFAULT_PIXEL_PER_METER * 7.0;
        let near = context(Position::new(seven_meters - 1.0, 0.0), 0, 0);
        let far = context(Position::new(seven_meters + 1.0, 0.0), 0, 0);

        let cond = IsTargetNearby { radius_m: 7.0 };
        assert!(cond.check(&near).unwrap());
        assert!(!cond.check(&far).unwrap());
    }

    #[test]
    fn nearby_fails_loudly_on_unusable_target() {
        let ctx = context(Position::new(f64::NAN, 0.0), 0, 0);
        assert!(IsTargetNearby { radius_m: 7.0 }.check(&ctx).is_err());
    }

    #[test]
    fn score_comparisons_partition_the_cases() {
        for (mine, theirs) in [(0, 0), (2, 1), (1, 2)] {
            let ctx = context(Position::ORIGIN, mine, theirs);
            let at_least = ScoreAtLeastTarget.check(&ctx).unwrap();
            let below = ScoreBelowTarget.check(&ctx).unwrap();
            assert_ne!(at_least, below);
            assert_eq!(at_least, mine >= theirs);
        }
    }
}
