//! Read-only views handed to the rendering layer.

use super::{Activity, AnimationState, Position};

/// Axis-aligned box around the zombie, in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    pub fn around(center: Position, half_extent: f64) -> Self {
        Self {
            left: center.x - half_extent,
            bottom: center.y - half_extent,
            right: center.x + half_extent,
            top: center.y + half_extent,
        }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.bottom <= other.top
            && other.bottom <= self.top
    }
}

/// Everything needed to draw a zombie for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub position: Position,
    /// Radians.
    pub heading: f64,
    pub animation: AnimationState,
    /// Frame to draw, always below `GameConfig::FRAME_COUNT`.
    pub frame: usize,
    pub score: u32,
    /// Current movement target (drawn as a marker).
    pub target: Position,
    pub activity: Activity,
    /// Sprite should be mirrored horizontally.
    pub facing_left: bool,
    pub bounds: BoundingBox,
}

impl AgentSnapshot {
    /// Name of the animation strip to draw ("Walk" or "Idle").
    pub fn animation_name(&self) -> &'static str {
        self.animation.into()
    }
}
