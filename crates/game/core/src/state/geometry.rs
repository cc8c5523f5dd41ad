//! Continuous 2D geometry in pixel units.

use core::ops::{Add, Sub};

/// A point in world pixels. `y` grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        let d = self - other;
        d.x * d.x + d.y * d.y
    }

    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Angle in radians of the ray from `self` to `other`.
    pub fn heading_to(self, other: Self) -> f64 {
        let d = other - self;
        d.y.atan2(d.x)
    }

    /// Moves `distance` pixels along `heading`.
    pub fn advanced(self, distance: f64, heading: f64) -> Self {
        Self {
            x: self.x + distance * heading.cos(),
            y: self.y + distance * heading.sin(),
        }
    }

    /// Reflects `other` through `self`: the point as far beyond `self` as
    /// `other` is on the near side.
    pub fn mirrored_away_from(self, other: Self) -> Self {
        self + (self - other)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Whether `a` and `b` are at most `radius_m` meters apart.
///
/// Compares squared pixel distances, so no square root is taken.
#[inline]
pub fn within_radius(a: Position, b: Position, radius_m: f64, pixel_per_meter: f64) -> bool {
    let radius_px = pixel_per_meter * radius_m;
    a.distance_squared(b) <= radius_px * radius_px
}

/// Axis-aligned rectangle of world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldBounds {
    pub const DEFAULT_WIDTH: f64 = 1280.0;
    pub const DEFAULT_HEIGHT: f64 = 1024.0;

    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Shrinks the rectangle by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.min_x + margin,
            self.min_y + margin,
            self.max_x - margin,
            self.max_y - margin,
        )
    }

    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x < self.max_x
            && self.min_y < self.max_y
    }

    pub fn contains(&self, p: Position) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
