//! Runtime configuration and its RON loader.

use std::path::Path;

use game_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::providers::ai::PolicyKind;

/// Runtime configuration shared across all zombies.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```ron
/// (
///     seed: 42,
///     zombie_count: 3,
///     game: (run_speed_kmph: 12.0),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Seed every zombie's random stream is derived from.
    pub seed: u64,
    /// Zombies spawned at random positions when the runtime is built.
    pub zombie_count: usize,
    pub policy: PolicyKind,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: 0,
            zombie_count: 1,
            policy: PolicyKind::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parses and validates a RON document.
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        tracing::info!(path = %path.display(), "runtime config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate().map_err(RuntimeError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = RuntimeConfig::from_ron_str("()").unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = RuntimeConfig::from_ron_str(
            "(seed: 42, zombie_count: 3, policy: Patrol, game: (run_speed_kmph: 12.0))",
        )
        .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.zombie_count, 3);
        assert_eq!(config.policy, PolicyKind::Patrol);
        assert_eq!(config.game.run_speed_kmph, 12.0);
        assert_eq!(
            config.game.sensing_radius_m,
            GameConfig::DEFAULT_SENSING_RADIUS_M
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = RuntimeConfig::from_ron_str("(game: (pixel_per_meter: -1.0))").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = RuntimeConfig::from_ron_str("(seed: \"many\")").unwrap_err();
        assert!(matches!(err, RuntimeError::ConfigParse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(zombie_count: 5)").unwrap();

        let config = RuntimeConfig::load(file.path()).unwrap();
        assert_eq!(config.zombie_count, 5);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RuntimeConfig::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, RuntimeError::ConfigRead { .. }));
    }
}
