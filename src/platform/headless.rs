//! Headless backend: scripted input, manual clock, recording renderer
//!
//! Implements every boundary service over shared handles so a test (or the
//! native demo binary) can keep driving and inspecting the backend after
//! handing it to the app.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use glam::Vec2;

use super::{Clock, Color, DisplayService, Event, InputSource, Key, Renderer};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, TICK_RATE};
use crate::{Rect, Viewport};

/// Clock driven by hand. `wait_for_tick` advances time by one tick so a
/// scripted session experiences the same pacing arithmetic as a live one.
pub struct ManualClock {
    time: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            time: Rc::new(Cell::new(0.0)),
        }
    }

    /// Shared handle for setting the time from outside the app
    pub fn handle(&self) -> Rc<Cell<f64>> {
        Rc::clone(&self.time)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }

    fn wait_for_tick(&mut self) {
        self.time.set(self.time.get() + 1.0 / TICK_RATE as f64);
    }
}

/// Mutable script state behind [`ScriptedInput`]
#[derive(Default)]
pub struct InputScript {
    pub events: VecDeque<Event>,
    pub held: Vec<Key>,
    pub mouse: Vec2,
}

impl InputScript {
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

/// Input service fed from an [`InputScript`]
pub struct ScriptedInput {
    script: Rc<RefCell<InputScript>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            script: Rc::new(RefCell::new(InputScript::default())),
        }
    }

    /// Shared handle for queueing events and setting held keys
    pub fn handle(&self) -> Rc<RefCell<InputScript>> {
        Rc::clone(&self.script)
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for ScriptedInput {
    fn pending_events(&mut self) -> Vec<Event> {
        self.script.borrow_mut().events.drain(..).collect()
    }

    fn held_keys(&self) -> Vec<Key> {
        self.script.borrow().held.clone()
    }

    fn mouse_position(&self) -> Vec2 {
        self.script.borrow().mouse
    }
}

/// What the recording renderer saw
#[derive(Default)]
pub struct RenderLog {
    pub backgrounds: u32,
    pub segments: u32,
    pub rects: u32,
    pub texts: Vec<String>,
    pub presents: u32,
    pub viewport: Option<Viewport>,
}

/// Render service that records calls instead of producing pixels
pub struct RecordingRenderer {
    log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(RenderLog::default())),
        }
    }

    /// Shared handle for inspecting recorded calls
    pub fn handle(&self) -> Rc<RefCell<RenderLog>> {
        Rc::clone(&self.log)
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_background(&mut self) {
        self.log.borrow_mut().backgrounds += 1;
    }

    fn draw_trail_segment(&mut self, _p0: Vec2, _p1: Vec2, _color: Color, _width: f32) {
        self.log.borrow_mut().segments += 1;
    }

    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.log.borrow_mut().rects += 1;
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32) {
        self.log.borrow_mut().texts.push(text.to_string());
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.log.borrow_mut().viewport = Some(viewport);
    }

    fn present(&mut self) {
        self.log.borrow_mut().presents += 1;
    }
}

/// Display service reporting a fixed fullscreen resolution
pub struct HeadlessDisplay {
    pub fullscreen_size: (u32, u32),
}

impl HeadlessDisplay {
    pub fn new(fullscreen_size: (u32, u32)) -> Self {
        Self { fullscreen_size }
    }
}

impl DisplayService for HeadlessDisplay {
    fn set_fullscreen(&mut self, fullscreen: bool) -> (u32, u32) {
        if fullscreen {
            self.fullscreen_size
        } else {
            (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)
        }
    }
}
