//! Platform boundary contracts
//!
//! The core consumes window, input, and pixel output as services behind
//! these traits; their implementations live outside the crate (a real
//! display backend) or in [`headless`] (tests and the native demo). The
//! core only ever writes through them and never reads pixels back.

pub mod headless;

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;
use crate::{Rect, Viewport};

/// Logical key identifiers. Bindings and control keys are expressed in
/// these; mapping from scancodes is the input backend's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Backspace,
    F11,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "up arrow"),
            Key::Down => write!(f, "down arrow"),
            Key::Left => write!(f, "left arrow"),
            Key::Right => write!(f, "right arrow"),
            Key::Escape => write!(f, "escape"),
            Key::Backspace => write!(f, "backspace"),
            Key::F11 => write!(f, "f11"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Mouse buttons the core cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// User events, delivered in occurrence order once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    MouseButtonDown { button: MouseButton, pos: Vec2 },
}

/// RGB color handed to the render service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Safe-zone tint for the freshest trail segments
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Backing for the menu entry under the mouse
    pub const HOVER: Color = Color::rgb(200, 200, 200);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Monotonic time source and frame pacing primitive
pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;
    /// Block until the next tick boundary at [`TICK_RATE`]
    fn wait_for_tick(&mut self);
}

/// Input polling service. Must be polled once per tick.
pub trait InputSource {
    /// Drain events that arrived since the last poll, in occurrence order
    fn pending_events(&mut self) -> Vec<Event>;
    /// Keys currently held down
    fn held_keys(&self) -> Vec<Key>;
    /// Current mouse position in logical canvas coordinates
    fn mouse_position(&self) -> Vec2;
}

/// Pixel output service. One call per visible element per tick, then
/// `present`.
pub trait Renderer {
    fn draw_background(&mut self);
    fn draw_trail_segment(&mut self, p0: Vec2, p1: Vec2, color: Color, width: f32);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
    /// Logical-to-physical mapping for subsequent draws
    fn set_viewport(&mut self, viewport: Viewport);
    fn present(&mut self);
}

/// Display-mode service. Returns the active surface size so the core can
/// refit the logical canvas.
pub trait DisplayService {
    fn set_fullscreen(&mut self, fullscreen: bool) -> (u32, u32);
}

/// Wall-clock implementation of [`Clock`] paced by sleeping to the next
/// tick boundary.
pub struct SystemClock {
    origin: Instant,
    next_tick: Instant,
    tick: Duration,
}

impl SystemClock {
    pub fn new() -> Self {
        let tick = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
        let now = Instant::now();
        Self {
            origin: now,
            next_tick: now + tick,
            tick,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn wait_for_tick(&mut self) {
        let now = Instant::now();
        if self.next_tick > now {
            thread::sleep(self.next_tick - now);
            self.next_tick += self.tick;
        } else {
            // Fell behind; resynchronize instead of bursting catch-up ticks
            self.next_tick = now + self.tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances_across_tick_waits() {
        let mut clock = SystemClock::new();
        let t0 = clock.now();
        clock.wait_for_tick();
        assert!(clock.now() > t0);
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(Key::Char('w').to_string(), "w");
        assert_eq!(Key::Left.to_string(), "left arrow");
        assert_eq!(Key::F11.to_string(), "f11");
    }
}
