//! Scripted stand-in for the player character the zombies react to.
use std::f64::consts::TAU;

use game_core::{BoundingBox, GameConfig, Position, TargetEntity, WorldBounds};

/// Half-size of a ball's pickup box in pixels.
const BALL_HALF_EXTENT: f64 = 10.0;

/// A boy running laps around the middle of the world.
#[derive(Clone, Debug)]
pub struct Boy {
    center: Position,
    radius: f64,
    /// Seconds per lap.
    period: f64,
    clock: f64,
    position: Position,
    ball_count: u32,
}

impl Boy {
    pub fn new(world: &WorldBounds) -> Self {
        let center = Position::new(
            (world.min_x + world.max_x) / 2.0,
            (world.min_y + world.max_y) / 2.0,
        );
        let radius = (world.max_x - world.min_x).min(world.max_y - world.min_y) / 3.0;
        Self {
            center,
            radius,
            period: 20.0,
            clock: 0.0,
            position: Position::new(center.x + radius, center.y),
            ball_count: 0,
        }
    }

    pub fn advance(&mut self, elapsed: f64) {
        self.clock += elapsed;
        let angle = TAU * self.clock / self.period;
        self.position = Position::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        );
    }

    pub fn pick_up(&mut self) {
        self.ball_count += 1;
    }
}

impl TargetEntity for Boy {
    fn position(&self) -> Position {
        self.position
    }

    fn score(&self) -> u32 {
        self.ball_count
    }
}

/// Balls scattered on a grid over the walkable area.
#[derive(Clone, Debug, Default)]
pub struct Balls {
    positions: Vec<Position>,
}

impl Balls {
    pub fn scatter(config: &GameConfig, columns: usize, rows: usize) -> Self {
        let area = config.walkable();
        let cell = |min: f64, max: f64, n: usize, i: usize| {
            min + (max - min) * (i as f64 + 0.5) / n as f64
        };
        let positions = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .map(|(row, column)| {
                Position::new(
                    cell(area.min_x, area.max_x, columns, column),
                    cell(area.min_y, area.max_y, rows, row),
                )
            })
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Removes and counts every ball overlapping `bounds`.
    pub fn collect_within(&mut self, bounds: &BoundingBox) -> usize {
        let before = self.positions.len();
        self.positions
            .retain(|ball| !BoundingBox::around(*ball, BALL_HALF_EXTENT).overlaps(bounds));
        before - self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boy_circles_the_world_center() {
        let world = WorldBounds::default();
        let mut boy = Boy::new(&world);
        let center = Position::new(640.0, 512.0);
        let radius = boy.position().distance(center);

        for _ in 0..50 {
            boy.advance(0.37);
            assert!((boy.position().distance(center) - radius).abs() < 1e-6);
            assert!(world.contains(boy.position()));
        }
    }

    #[test]
    fn balls_are_collected_once() {
        let config = GameConfig::default();
        let mut balls = Balls::scatter(&config, 4, 3);
        assert_eq!(balls.len(), 12);

        let area = config.walkable();
        let first = Position::new(
            area.min_x + (area.max_x - area.min_x) / 8.0,
            area.min_y + (area.max_y - area.min_y) / 6.0,
        );
        let bounds = BoundingBox::around(first, config.half_extent);

        assert_eq!(balls.collect_within(&bounds), 1);
        assert_eq!(balls.collect_within(&bounds), 0);
        assert_eq!(balls.len(), 11);
    }
}
