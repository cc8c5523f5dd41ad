//! Complete decision policies for zombies.
//!
//! # Architecture
//!
//! ```text
//! chase_flee_wander()
//!   └─ Selector "Chase, flee or wander"
//!       ├─ Sequence "Chase"
//!       │   ├─ IsTargetNearby(7m)
//!       │   ├─ ScoreAtLeastTarget
//!       │   └─ ChaseTarget(0.5m)
//!       ├─ Sequence "Flee"
//!       │   ├─ IsTargetNearby(7m)
//!       │   ├─ ScoreBelowTarget
//!       │   └─ FleeFromTarget(7m)
//!       └─ Sequence "Wander"
//!           ├─ PickRandomPoint
//!           └─ MoveToTarget(0.5m)
//! ```
//!
//! Priority order matters: Flee is only tried when Chase's conditions fail,
//! and Wander only when both fail. The proximity check is repeated in both
//! Chase and Flee rather than shared.

use behavior_tree::Behavior;
use behavior_tree::builder::{action, condition, selector, sequence};
use game_core::{Activity, GameConfig};

use super::context::ZombieContext;
use super::nodes::{
    ChaseTarget, FleeFromTarget, IsTargetNearby, MoveToTarget, NextPatrolPoint, PickRandomPoint,
    ScoreAtLeastTarget, ScoreBelowTarget,
};

/// Root node type for zombie policies.
pub type ZombieTree = Box<dyn Behavior<ZombieContext>>;

/// Which preset a zombie is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PolicyKind {
    /// Chase a weaker target, flee a stronger one, otherwise wander.
    #[default]
    ChaseFleeWander,
    /// Walk the fixed waypoint route, ignoring the target.
    Patrol,
}

impl PolicyKind {
    /// Builds a fresh tree for this policy.
    pub fn build(self, config: &GameConfig) -> ZombieTree {
        match self {
            Self::ChaseFleeWander => chase_flee_wander(config),
            Self::Patrol => patrol(config),
        }
    }
}

/// The default zombie: chase, flee or wander depending on the target.
///
/// # Behavior
///
/// 1. Target within the sensing radius and zombie score >= target score:
///    chase it
/// 2. Target within the sensing radius and zombie score < target score:
///    run away until the flee clearance is open
/// 3. Otherwise walk to a random point, picking a new one on arrival
pub fn chase_flee_wander(config: &GameConfig) -> ZombieTree {
    selector(
        "Chase, flee or wander",
        vec![chase(config), flee(config), wander(config)],
    )
}

/// Walks the waypoint route in order, looping forever.
pub fn patrol(config: &GameConfig) -> ZombieTree {
    sequence(
        "Patrol",
        vec![
            action(
                "next patrol point",
                NextPatrolPoint {
                    arrival_radius_m: config.arrival_radius_m,
                },
            ),
            action(
                "move to point",
                MoveToTarget {
                    arrival_radius_m: config.arrival_radius_m,
                    activity: Activity::Patrolling,
                },
            ),
        ],
    )
}

fn chase(config: &GameConfig) -> ZombieTree {
    sequence(
        "Chase",
        vec![
            condition(
                "target nearby",
                IsTargetNearby {
                    radius_m: config.sensing_radius_m,
                },
            ),
            condition("score at least target", ScoreAtLeastTarget),
            action(
                "move to target",
                ChaseTarget {
                    arrival_radius_m: config.arrival_radius_m,
                },
            ),
        ],
    )
}

fn flee(config: &GameConfig) -> ZombieTree {
    sequence(
        "Flee",
        vec![
            condition(
                "target nearby",
                IsTargetNearby {
                    radius_m: config.sensing_radius_m,
                },
            ),
            condition("score below target", ScoreBelowTarget),
            action(
                "run away from target",
                FleeFromTarget {
                    clearance_m: config.flee_clearance_m,
                },
            ),
        ],
    )
}

fn wander(config: &GameConfig) -> ZombieTree {
    sequence(
        "Wander",
        vec![
            action(
                "pick random point",
                PickRandomPoint {
                    arrival_radius_m: config.arrival_radius_m,
                },
            ),
            action(
                "move to point",
                MoveToTarget {
                    arrival_radius_m: config.arrival_radius_m,
                    activity: Activity::Wandering,
                },
            ),
        ],
    )
}
