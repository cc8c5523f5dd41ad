//! Per-tick driver for a single zombie.
//!
//! A [`Zombie`] owns its state, its random stream and its behavior tree. The
//! tree is built once at construction and lives exactly as long as the
//! zombie. [`Zombie::tick`] is the only entry point that advances the AI;
//! everything else is a read-only view or an event hook.

use std::fmt;
use std::sync::Arc;

use behavior_tree::Status;
use game_core::{
    AgentSnapshot, GameConfig, GameError, PcgStream, Position, TargetEntity, TargetSnapshot,
    ZombieState,
};

use crate::api::{Result, RuntimeError};
use crate::providers::ai::{PolicyKind, ZombieContext, ZombieTree};

/// Identifier of a zombie within a [`crate::Runtime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZombieId(pub u32);

impl fmt::Display for ZombieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zombie#{}", self.0)
    }
}

/// An autonomous zombie: state, blackboard and behavior tree.
pub struct Zombie {
    id: ZombieId,
    policy: PolicyKind,
    ctx: ZombieContext,
    tree: ZombieTree,
}

impl Zombie {
    /// Spawns a zombie.
    ///
    /// Without a `spawn` position the zombie is placed uniformly at random in
    /// the walkable part of the world. The initial animation frame is random
    /// too. Both draws come from the zombie's own stream seeded by
    /// `world_seed` and `id`.
    pub fn new(
        id: ZombieId,
        config: Arc<GameConfig>,
        policy: PolicyKind,
        world_seed: u64,
        spawn: Option<Position>,
    ) -> Result<Self> {
        config.validate().map_err(RuntimeError::InvalidConfig)?;
        let mut rng = PcgStream::new(world_seed, id.0);

        let position = match spawn {
            Some(position) if !position.is_finite() => {
                return Err(RuntimeError::InvalidArgument(GameError::InvalidArgument {
                    argument: "spawn",
                    reason: "coordinates must be finite",
                }));
            }
            Some(position) => position,
            None => {
                let area = config.walkable();
                let x = rng.range_f64(area.min_x, area.max_x);
                let y = rng.range_f64(area.min_y, area.max_y);
                Position::new(x, y)
            }
        };
        let frame = rng.range_u32(0, GameConfig::FRAME_COUNT as u32 - 1);

        let tree = policy.build(&config);
        let state = ZombieState::new(position, f64::from(frame));

        tracing::info!(
            zombie = %id,
            x = position.x,
            y = position.y,
            ?policy,
            "zombie spawned"
        );

        Ok(Self {
            id,
            policy,
            ctx: ZombieContext::new(state, config, rng),
            tree,
        })
    }

    pub fn id(&self) -> ZombieId {
        self.id
    }

    pub fn state(&self) -> &ZombieState {
        &self.ctx.state
    }

    /// Advances the zombie by `elapsed` seconds.
    ///
    /// Advances the animation phase, then evaluates the behavior tree once
    /// from its root against a snapshot of `target`. The target is only read.
    ///
    /// The tick is all-or-nothing: if any node fails, every change made
    /// during the tick (frame, position, heading, movement target, random
    /// draws) is rolled back and [`RuntimeError::PolicyEvaluation`] is
    /// returned. The next tick starts fresh.
    pub fn tick(&mut self, elapsed: f64, target: &(impl TargetEntity + ?Sized)) -> Result<Status> {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(RuntimeError::InvalidArgument(GameError::InvalidArgument {
                argument: "elapsed",
                reason: "must be a non-negative finite number of seconds",
            }));
        }

        let saved_state = self.ctx.state.clone();
        let saved_rng = self.ctx.rng.clone();

        self.ctx.prepare(TargetSnapshot::capture(target), elapsed);
        let frame_rate = self.ctx.config.frame_rate();
        self.ctx.state.advance_frame(elapsed, frame_rate);
        self.ctx.state.begin_evaluation();

        match self.tree.tick(&mut self.ctx) {
            Ok(status) => {
                tracing::debug!(
                    zombie = %self.id,
                    activity = %self.ctx.state.activity(),
                    ?status,
                    x = self.ctx.state.position.x,
                    y = self.ctx.state.position.y,
                    "tick evaluated"
                );
                Ok(status)
            }
            Err(source) => {
                self.ctx.state = saved_state;
                self.ctx.rng = saved_rng;
                tracing::warn!(
                    zombie = %self.id,
                    node = source.node(),
                    error = %source,
                    "tick dropped"
                );
                Err(RuntimeError::PolicyEvaluation {
                    zombie: self.id,
                    source,
                })
            }
        }
    }

    /// Read-only view for the rendering layer.
    pub fn snapshot(&self) -> AgentSnapshot {
        self.ctx.state.snapshot(&self.ctx.config)
    }

    /// A scoring collision happened; the score goes up by one.
    pub fn on_score_event(&mut self) {
        self.ctx.state.on_score_event();
        tracing::info!(zombie = %self.id, score = self.ctx.state.score(), "zombie scored");
    }

    /// Routes a collision tagged with `group`. Returns whether it scored.
    pub fn handle_collision(&mut self, group: &str) -> bool {
        let scored = self.ctx.state.handle_collision(group);
        if scored {
            tracing::info!(zombie = %self.id, score = self.ctx.state.score(), "zombie scored");
        }
        scored
    }

    /// Sends the zombie toward `(x, y)`.
    ///
    /// Fails with [`RuntimeError::InvalidArgument`] when a coordinate is
    /// missing or not finite.
    pub fn set_target_point(&mut self, x: Option<f64>, y: Option<f64>) -> Result<()> {
        self.ctx
            .state
            .set_target_point(x, y)
            .map_err(RuntimeError::InvalidArgument)
    }
}

impl fmt::Debug for Zombie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zombie")
            .field("id", &self.id)
            .field("policy", &self.policy)
            .field("state", &self.ctx.state)
            .finish_non_exhaustive()
    }
}
