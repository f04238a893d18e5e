//! Mode state machine and the fixed-rate control loop
//!
//! `Mode` is the only piece of global control state and it lives here.
//! Transitions are a pure table `(Mode, Event) -> (Mode, Effect)`; the
//! `App` interprets effects against the world and the platform services
//! and drives one input/dispatch/render cycle per tick in every mode.

use crate::Viewport;
use crate::consts::TICK_RATE;
use crate::platform::{Clock, DisplayService, Event, InputSource, Key, MouseButton, Renderer};
use crate::settings::Settings;
use crate::sim::{TickInput, World, tick};
use crate::ui;

/// Coarse top-level state of the control loop. `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Game,
    Paused,
    Settings,
    Instructions,
    Quit,
}

/// Settings screen substate. Extension point; only one screen exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsScreen {
    Main,
}

/// Side effect a transition asks the controller to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fresh round: both players to spawn, trails cleared, death counts kept
    ResetPlayers,
    /// Remember when the pause began
    MarkPauseStart,
    /// Shift both trails forward by the elapsed pause duration
    ShiftTrailTime,
    ToggleFullscreen,
    /// "Change Key Bindings" is declared in the settings list but not
    /// implemented; selecting it must stay a silent no-op
    KeyBindingsPlaceholder,
}

/// Pure transition table. `None` leaves the mode (and everything else)
/// untouched; the quit event wins in every mode.
pub fn transition(mode: Mode, event: &Event) -> Option<(Mode, Option<Effect>)> {
    if matches!(event, Event::Quit) {
        return Some((Mode::Quit, None));
    }
    match (mode, event) {
        (
            Mode::Menu,
            Event::MouseButtonDown {
                button: MouseButton::Left,
                pos,
            },
        ) => match ui::menu_hit(*pos)? {
            0 => Some((Mode::Game, Some(Effect::ResetPlayers))),
            1 => Some((Mode::Instructions, None)),
            2 => Some((Mode::Settings, None)),
            _ => Some((Mode::Quit, None)),
        },
        (Mode::Game, Event::KeyDown(Key::Escape)) => {
            Some((Mode::Paused, Some(Effect::MarkPauseStart)))
        }
        (Mode::Game, Event::KeyDown(Key::F11)) => Some((Mode::Game, Some(Effect::ToggleFullscreen))),
        (Mode::Paused, Event::KeyDown(Key::Escape)) => {
            Some((Mode::Game, Some(Effect::ShiftTrailTime)))
        }
        // Back to the menu without touching trail time; a later Start Game
        // resets the round anyway
        (Mode::Paused, Event::KeyDown(Key::Backspace)) => Some((Mode::Menu, None)),
        (
            Mode::Settings,
            Event::MouseButtonDown {
                button: MouseButton::Left,
                pos,
            },
        ) => match ui::settings_hit(*pos)? {
            0 => Some((Mode::Settings, Some(Effect::ToggleFullscreen))),
            _ => Some((Mode::Settings, Some(Effect::KeyBindingsPlaceholder))),
        },
        (Mode::Instructions, Event::KeyDown(Key::Escape | Key::Backspace)) => {
            Some((Mode::Menu, None))
        }
        _ => None,
    }
}

/// The game: world state, mode, and the four platform services
pub struct App {
    clock: Box<dyn Clock>,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
    display: Box<dyn DisplayService>,
    settings: Settings,
    world: World,
    mode: Mode,
    settings_screen: SettingsScreen,
    fullscreen: bool,
    pause_started: f64,
}

impl App {
    pub fn new(
        clock: Box<dyn Clock>,
        input: Box<dyn InputSource>,
        renderer: Box<dyn Renderer>,
        display: Box<dyn DisplayService>,
        settings: Settings,
    ) -> Self {
        let fullscreen = settings.fullscreen;
        let mut app = Self {
            clock,
            input,
            renderer,
            display,
            settings,
            world: World::new(),
            mode: Mode::Menu,
            settings_screen: SettingsScreen::Main,
            fullscreen: false,
            pause_started: 0.0,
        };
        app.apply_display_mode(fullscreen);
        app
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run until quit, paced by the clock
    pub fn run(&mut self) {
        log::info!("Entering control loop at {TICK_RATE} Hz");
        while self.mode != Mode::Quit {
            self.step();
            self.clock.wait_for_tick();
        }
        log::info!("Quit requested, leaving control loop");
    }

    /// One control-loop iteration: poll input, dispatch, render
    pub fn step(&mut self) {
        for event in self.input.pending_events() {
            self.handle_event(&event);
            if self.mode == Mode::Quit {
                return;
            }
        }
        match self.mode {
            Mode::Menu => self.menu_frame(),
            Mode::Game => self.game_frame(),
            Mode::Paused => self.paused_frame(),
            Mode::Settings => self.settings_frame(),
            Mode::Instructions => self.instructions_frame(),
            Mode::Quit => {}
        }
    }

    /// Apply one event through the transition table
    pub fn handle_event(&mut self, event: &Event) {
        let Some((next, effect)) = transition(self.mode, event) else {
            return;
        };
        if let Some(effect) = effect {
            self.apply_effect(effect);
        }
        if next != self.mode {
            log::info!("Mode {:?} -> {next:?}", self.mode);
            self.mode = next;
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ResetPlayers => self.world.reset_players(),
            Effect::MarkPauseStart => self.pause_started = self.clock.now(),
            Effect::ShiftTrailTime => {
                let elapsed = self.clock.now() - self.pause_started;
                self.world.shift_trail_time(elapsed);
                log::info!("Resumed after {elapsed:.2}s pause");
            }
            Effect::ToggleFullscreen => self.apply_display_mode(!self.fullscreen),
            Effect::KeyBindingsPlaceholder => {
                log::info!("Key binding editor not implemented");
            }
        }
    }

    fn apply_display_mode(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        let (w, h) = self.display.set_fullscreen(fullscreen);
        self.renderer.set_viewport(Viewport::fit(w, h));
        log::info!("Display surface {w}x{h}, fullscreen={fullscreen}");
    }

    /// One simulation tick plus scene draw
    fn game_frame(&mut self) {
        let held = self.input.held_keys();
        let input = TickInput {
            player1_held: self.settings.player1_keys.held_directions(&held),
            player2_held: self.settings.player2_keys.held_directions(&held),
        };
        let now = self.clock.now();
        if tick(&mut self.world, &input, now) {
            let [p1, p2] = &self.world.players;
            log::info!(
                "Crash; death counts now {} / {}",
                p1.death_count,
                p2.death_count
            );
        }
        ui::draw_game(self.renderer.as_mut(), &self.world);
        self.renderer.present();
    }

    /// Frozen scene plus overlay; no simulation, no trail updates
    fn paused_frame(&mut self) {
        ui::draw_game(self.renderer.as_mut(), &self.world);
        ui::draw_pause_overlay(self.renderer.as_mut());
        self.renderer.present();
    }

    fn menu_frame(&mut self) {
        let mouse = self.input.mouse_position();
        self.renderer.draw_background();
        ui::draw_menu(self.renderer.as_mut(), mouse);
        self.renderer.present();
    }

    fn settings_frame(&mut self) {
        let mouse = self.input.mouse_position();
        self.renderer.draw_background();
        match self.settings_screen {
            SettingsScreen::Main => {
                ui::draw_settings(self.renderer.as_mut(), mouse, &self.settings)
            }
        }
        self.renderer.present();
    }

    fn instructions_frame(&mut self) {
        self.renderer.draw_background();
        ui::draw_instructions(self.renderer.as_mut());
        self.renderer.present();
    }
}
