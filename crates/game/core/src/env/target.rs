//! Read-only view of the entity the zombie reacts to.

use crate::state::Position;

/// The entity the zombie senses: where it is and how many points it holds.
///
/// The zombie only ever reads through this trait. Implementors are owned by
/// the outer simulation and handed to the agent at tick time.
pub trait TargetEntity {
    fn position(&self) -> Position;

    fn score(&self) -> u32;
}

/// Copy of a [`TargetEntity`] taken at the start of a tick.
///
/// Every node in one tick sees the same target state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSnapshot {
    pub position: Position,
    pub score: u32,
}

impl TargetSnapshot {
    pub const fn new(position: Position, score: u32) -> Self {
        Self { position, score }
    }

    pub fn capture(target: &(impl TargetEntity + ?Sized)) -> Self {
        Self {
            position: target.position(),
            score: target.score(),
        }
    }
}

impl TargetEntity for TargetSnapshot {
    fn position(&self) -> Position {
        self.position
    }

    fn score(&self) -> u32 {
        self.score
    }
}
