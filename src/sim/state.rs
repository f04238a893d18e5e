//! Simulation state and core types
//!
//! Trails are a sliding time window, not a fixed-count buffer: samples
//! expire by age, and a pause must therefore shift every timestamp forward
//! on resume or the pause itself would expire trail history.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use crate::Rect;
use crate::consts::*;

/// Facing of a player marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in canvas coordinates (y grows downward)
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// One recorded marker position. Immutable once appended; only
/// [`Trail::shift_timestamps`] rewrites timestamps, and only on resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    pub timestamp: f64,
}

/// Per-player position history in chronological order
#[derive(Debug, Clone, Default)]
pub struct Trail {
    samples: Vec<TrailSample>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. Callers only append while the simulation is active;
    /// the paused mode never reaches this.
    pub fn append(&mut self, pos: Vec2, now: f64) {
        self.samples.push(TrailSample {
            pos,
            timestamp: now,
        });
    }

    /// Drop every sample older than the retention window
    pub fn prune(&mut self, now: f64) {
        self.samples
            .retain(|s| now - s.timestamp <= TRAIL_RETENTION_SECS);
    }

    /// Shift every timestamp forward. Invoked only at the PAUSED→GAME
    /// transition so the retention window after resume matches the one that
    /// existed at the moment of pausing.
    pub fn shift_timestamps(&mut self, delta: f64) {
        for sample in &mut self.samples {
            sample.timestamp += delta;
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrailSample] {
        &self.samples
    }

    /// Consecutive sample pairs, excluding the `SAFE_ZONE_SAMPLES` freshest
    /// samples. The safe zone is the marker's own immediate tail; without
    /// the exemption every marker would self-collide on its first ticks.
    pub fn collidable_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let end = self.samples.len().saturating_sub(SAFE_ZONE_SAMPLES);
        self.samples[..end].windows(2).map(|w| (w[0].pos, w[1].pos))
    }
}

/// Render-agnostic player identity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerColor {
    Red,
    Blue,
}

/// A player marker: position, facing, trail, cumulative death count
#[derive(Debug, Clone)]
pub struct Player {
    spawn: Vec2,
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Direction,
    pub trail: Trail,
    /// Session statistic; survives `reset`, zeroed only by process restart
    pub death_count: u32,
    pub color: PlayerColor,
}

impl Player {
    pub fn new(spawn: Vec2, color: PlayerColor) -> Self {
        Self {
            spawn,
            pos: spawn,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            facing: Direction::Up,
            trail: Trail::new(),
            death_count: 0,
            color,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Apply held steering directions in binding-table order. Later entries
    /// win; a direction opposite to the current facing is ignored, so a
    /// marker can never reverse into its own neck.
    pub fn steer(&mut self, held: &[Direction]) {
        for &dir in held {
            if dir != self.facing.opposite() {
                self.facing = dir;
            }
        }
    }

    /// Move one tick in the facing direction. A move that would push the
    /// bounding box outside the canvas is suppressed for this tick; facing
    /// is unaffected.
    pub fn advance(&mut self) {
        let next = self.pos + self.facing.offset() * PLAYER_VELOCITY;
        if next.x < 0.0
            || next.x > CANVAS_WIDTH - self.size.x
            || next.y < 0.0
            || next.y > CANVAS_HEIGHT - self.size.y
        {
            return;
        }
        self.pos = next;
    }

    /// Record the marker center and expire old samples
    pub fn update_trail(&mut self, active: bool, now: f64) {
        if active {
            self.trail.append(self.center(), now);
        }
        self.trail.prune(now);
    }

    /// Check the bounding box against own collidable segments and the
    /// opponent's. Each trail applies its safe-zone exemption
    /// independently; an empty segment set never collides.
    pub fn check_collision(&self, other_trail: &Trail) -> bool {
        let bounds = self.bounds();
        collision::box_hits_trail(&bounds, &self.trail)
            || collision::box_hits_trail(&bounds, other_trail)
    }

    /// Back to spawn, facing up, trail cleared. `death_count` persists.
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.facing = Direction::Up;
        self.trail.clear();
    }

    pub fn adjust_trail_time(&mut self, delta: f64) {
        self.trail.shift_timestamps(delta);
    }
}

/// The pair of players the simulation tick operates on
#[derive(Debug, Clone)]
pub struct World {
    pub players: [Player; 2],
}

impl World {
    pub fn new() -> Self {
        let spawn_y = CANVAS_HEIGHT - PLAYER_HEIGHT - 100.0;
        Self {
            players: [
                Player::new(Vec2::new(800.0, spawn_y), PlayerColor::Red),
                Player::new(Vec2::new(100.0, spawn_y), PlayerColor::Blue),
            ],
        }
    }

    pub fn reset_players(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Forward both trails across a pause of the given duration
    pub fn shift_trail_time(&mut self, delta: f64) {
        for player in &mut self.players {
            player.adjust_trail_time(delta);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
