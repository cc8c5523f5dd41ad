//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from policy evaluation, agent state validation and config
//! loading so clients can bubble them up with consistent context.
use std::path::PathBuf;

use behavior_tree::BehaviorError;
use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

use crate::zombie::ZombieId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A condition or action failed mid-tick. The tick was dropped and the
    /// zombie's state rolled back to where it was before the tick.
    #[error("policy evaluation failed for {zombie}")]
    PolicyEvaluation {
        zombie: ZombieId,
        #[source]
        source: BehaviorError,
    },

    #[error("invalid argument")]
    InvalidArgument(#[source] GameError),

    #[error("invalid configuration")]
    InvalidConfig(#[source] GameError),

    #[error("{0} does not exist")]
    UnknownZombie(ZombieId),

    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    ConfigParse(#[from] ron::error::SpannedError),
}

impl RuntimeError {
    /// How the owning loop should treat this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PolicyEvaluation { .. } => ErrorSeverity::Fatal,
            Self::InvalidArgument(err) | Self::InvalidConfig(err) => err.severity(),
            Self::UnknownZombie(_) | Self::ConfigRead { .. } | Self::ConfigParse(_) => {
                ErrorSeverity::Validation
            }
        }
    }
}
