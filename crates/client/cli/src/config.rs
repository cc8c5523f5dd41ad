//! Driver configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// RON file with the runtime configuration. Defaults are used when unset.
    pub config_path: Option<PathBuf>,
    /// Number of ticks to simulate.
    pub frames: u64,
    /// Ticks per second of simulated (and wall-clock) time.
    pub fps: u32,
    /// Overrides the seed from the config file.
    pub seed: Option<u64>,
    /// Overrides the zombie count from the config file.
    pub zombie_count: Option<usize>,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            frames: Self::DEFAULT_FRAMES,
            fps: Self::DEFAULT_FPS,
            seed: None,
            zombie_count: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_FRAMES: u64 = 600;
    pub const DEFAULT_FPS: u32 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ZOMBIE_CONFIG` - Path to a RON runtime config (default: built-in defaults)
    /// - `ZOMBIE_FRAMES` - Ticks to simulate (default: 600)
    /// - `ZOMBIE_FPS` - Ticks per second, at least 1 (default: 60)
    /// - `ZOMBIE_SEED` - Seed override
    /// - `ZOMBIE_COUNT` - Zombie count override
    /// - `ZOMBIE_SESSION_ID` - Log session name (default: auto-generated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.config_path = lookup("ZOMBIE_CONFIG").map(PathBuf::from);
        if let Some(frames) = read_var::<u64>(&lookup, "ZOMBIE_FRAMES") {
            config.frames = frames;
        }
        if let Some(fps) = read_var::<u32>(&lookup, "ZOMBIE_FPS") {
            config.fps = fps.max(1);
        }
        config.seed = read_var(&lookup, "ZOMBIE_SEED");
        config.zombie_count = read_var(&lookup, "ZOMBIE_COUNT");
        config.session_id = lookup("ZOMBIE_SESSION_ID").filter(|id| !id.is_empty());

        config
    }

    /// Seconds of simulated time per tick.
    pub fn tick_seconds(&self) -> f64 {
        1.0 / f64::from(self.fps)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
