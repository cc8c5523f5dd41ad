//! Multi-zombie orchestrator.
//!
//! The runtime owns every zombie and steps them one after another against a
//! single shared target. Zombies never see each other; each owns its own
//! tree, state and random stream.

use std::sync::Arc;

use behavior_tree::Status;
use game_core::{AgentSnapshot, GameConfig, Position, TargetEntity};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::zombie::{Zombie, ZombieId};

/// Outcome of one [`Runtime::step`].
#[derive(Debug, Default)]
pub struct StepReport {
    /// Step number, starting at 1.
    pub tick: u64,
    /// Root status of every zombie whose tick completed.
    pub statuses: Vec<(ZombieId, Status)>,
    /// Zombies whose tick was dropped.
    pub failures: Vec<RuntimeError>,
}

impl StepReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn status_of(&self, id: ZombieId) -> Option<Status> {
        self.statuses
            .iter()
            .find(|(zombie, _)| *zombie == id)
            .map(|(_, status)| *status)
    }
}

/// Owns the zombies and drives them once per simulation frame.
pub struct Runtime {
    config: RuntimeConfig,
    zombies: Vec<Zombie>,
    tick: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }

    pub fn zombie(&self, id: ZombieId) -> Result<&Zombie> {
        self.zombies
            .iter()
            .find(|zombie| zombie.id() == id)
            .ok_or(RuntimeError::UnknownZombie(id))
    }

    fn zombie_mut(&mut self, id: ZombieId) -> Result<&mut Zombie> {
        self.zombies
            .iter_mut()
            .find(|zombie| zombie.id() == id)
            .ok_or(RuntimeError::UnknownZombie(id))
    }

    /// Ticks every zombie once against `target`.
    ///
    /// A zombie whose tick fails is rolled back and reported in
    /// [`StepReport::failures`]; the remaining zombies still tick.
    pub fn step(&mut self, elapsed: f64, target: &(impl TargetEntity + ?Sized)) -> StepReport {
        self.tick += 1;
        let mut report = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };

        for zombie in &mut self.zombies {
            match zombie.tick(elapsed, target) {
                Ok(status) => report.statuses.push((zombie.id(), status)),
                Err(err) => report.failures.push(err),
            }
        }

        if !report.is_clean() {
            tracing::warn!(
                tick = report.tick,
                failed = report.failures.len(),
                "step finished with dropped ticks"
            );
        }
        report
    }

    /// Render snapshots of every zombie.
    pub fn snapshots(&self) -> Vec<(ZombieId, AgentSnapshot)> {
        self.zombies
            .iter()
            .map(|zombie| (zombie.id(), zombie.snapshot()))
            .collect()
    }

    /// Routes a collision event to a zombie. Returns whether it scored.
    pub fn handle_collision(&mut self, id: ZombieId, group: &str) -> Result<bool> {
        Ok(self.zombie_mut(id)?.handle_collision(group))
    }

    pub fn on_score_event(&mut self, id: ZombieId) -> Result<()> {
        self.zombie_mut(id)?.on_score_event();
        Ok(())
    }

    pub fn set_target_point(&mut self, id: ZombieId, x: Option<f64>, y: Option<f64>) -> Result<()> {
        self.zombie_mut(id)?.set_target_point(x, y)
    }
}

/// Builder for [`Runtime`].
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    spawns: Vec<Position>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a zombie at a fixed position, on top of the randomly placed
    /// `zombie_count`.
    pub fn spawn_at(mut self, position: Position) -> Self {
        self.spawns.push(position);
        self
    }

    /// Validates the configuration and spawns every zombie.
    ///
    /// Zombies at fixed positions get the lowest ids, in the order they were
    /// added.
    pub fn build(self) -> Result<Runtime> {
        self.config.validate()?;
        let game: Arc<GameConfig> = Arc::new(self.config.game.clone());

        let fixed = self.spawns.into_iter().map(Some);
        let random = std::iter::repeat_n(None, self.config.zombie_count);

        let zombies = fixed
            .chain(random)
            .enumerate()
            .map(|(index, spawn)| {
                let id = u32::try_from(index)
                    .map(ZombieId)
                    .map_err(|_| RuntimeError::InvalidConfig(game_core::GameError::InvalidConfig {
                        field: "zombie_count",
                        reason: "too many zombies",
                    }))?;
                Zombie::new(id, game.clone(), self.config.policy, self.config.seed, spawn)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            zombies = zombies.len(),
            seed = self.config.seed,
            policy = ?self.config.policy,
            "runtime built"
        );

        Ok(Runtime {
            config: self.config,
            zombies,
            tick: 0,
        })
    }
}
