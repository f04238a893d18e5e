//! Trail Duel - a two-player light-cycle trail game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, trails, collisions)
//! - `app`: Mode state machine and the fixed-rate control loop
//! - `ui`: Menu/settings layout, hit-testing, scene drawing
//! - `platform`: Boundary service contracts (clock, input, render, display)
//! - `settings`: Per-session configuration and key bindings

pub mod app;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{App, Mode};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical canvas width in pixels
    pub const CANVAS_WIDTH: f32 = 1000.0;
    /// Logical canvas height in pixels
    pub const CANVAS_HEIGHT: f32 = 800.0;

    /// Player marker bounding box (square)
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Distance moved per tick, in pixels
    pub const PLAYER_VELOCITY: f32 = 3.0;

    /// Sliding retention window for trail samples, in seconds
    pub const TRAIL_RETENTION_SECS: f64 = 3.0;
    /// Stroke width for trail segments (render and collision)
    pub const TRAIL_WIDTH: f32 = 5.0;
    /// Number of most-recent samples exempt from collision checks
    pub const SAFE_ZONE_SAMPLES: usize = 13;

    /// Fixed control-loop rate (all modes)
    pub const TICK_RATE: u32 = 60;
}

/// Axis-aligned rectangle in logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Rectangle centered on a point
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Overlap test. Touching edges do not count as overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Point containment, half-open: the right/bottom edges are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Mapping of the logical canvas onto a physical surface: uniform scale,
/// centered, aspect ratio preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Identity mapping (windowed mode at logical resolution)
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Fit the logical canvas into a physical surface of the given pixel size
    pub fn fit(physical_width: u32, physical_height: u32) -> Self {
        let pw = physical_width as f32;
        let ph = physical_height as f32;
        let scale = (pw / consts::CANVAS_WIDTH).min(ph / consts::CANVAS_HEIGHT);
        let offset = Vec2::new(
            (pw - consts::CANVAS_WIDTH * scale) / 2.0,
            (ph - consts::CANVAS_HEIGHT * scale) / 2.0,
        );
        Self { scale, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects() {
        let a = Rect::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Touching edges are not an overlap
        let c = Rect::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_viewport_fit_wide_surface() {
        // 1000x800 into 1920x1080: height-limited, scale 1.35, centered in x
        let vp = Viewport::fit(1920, 1080);
        assert!((vp.scale - 1.35).abs() < 1e-6);
        assert!((vp.offset.x - 285.0).abs() < 1e-4);
        assert!(vp.offset.y.abs() < 1e-4);
    }

    #[test]
    fn test_viewport_fit_native_size() {
        let vp = Viewport::fit(1000, 800);
        assert_eq!(vp, Viewport::identity());
    }
}
