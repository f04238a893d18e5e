//! Menu and scene drawing
//!
//! Layout is data: entry rects are fixed-size boxes on a centered column,
//! hit-tested against the mouse. All pixel output goes through the render
//! service; this module never keeps state of its own.

use glam::Vec2;

use crate::Rect;
use crate::consts::*;
use crate::platform::{Color, Renderer};
use crate::settings::{KeyBindings, Settings};
use crate::sim::{Player, PlayerColor, World};

pub const MENU_OPTIONS: [&str; 4] = ["Start Game", "Instructions", "Settings", "Quit"];
pub const SETTINGS_OPTIONS: [&str; 2] = ["Toggle Fullscreen", "Change Key Bindings"];

pub const INSTRUCTION_LINES: [&str; 5] = [
    "Steer your marker and avoid every trail, including your own.",
    "Trails fade after a few seconds; the green tail just behind",
    "a marker is safe to touch.",
    "Player 1 steers with the arrow keys, player 2 with WASD.",
    "Escape pauses the game. Backspace returns to this menu.",
];

// Entry footprints are fixed; text metrics belong to the text renderer
const MENU_ENTRY_SIZE: Vec2 = Vec2::new(300.0, 48.0);
const MENU_TOP: f32 = 150.0;
const MENU_SPACING: f32 = 100.0;

const SETTINGS_ENTRY_SIZE: Vec2 = Vec2::new(280.0, 36.0);
const SETTINGS_TOP: f32 = 150.0;
const SETTINGS_SPACING: f32 = 50.0;

/// Footprint of a main-menu entry
pub fn menu_entry_rect(index: usize) -> Rect {
    Rect::from_center_size(
        Vec2::new(CANVAS_WIDTH / 2.0, MENU_TOP + index as f32 * MENU_SPACING),
        MENU_ENTRY_SIZE,
    )
}

/// Index of the menu entry under `pos`, if any
pub fn menu_hit(pos: Vec2) -> Option<usize> {
    (0..MENU_OPTIONS.len()).find(|&i| menu_entry_rect(i).contains(pos))
}

/// Footprint of a settings entry
pub fn settings_entry_rect(index: usize) -> Rect {
    Rect::from_center_size(
        Vec2::new(
            CANVAS_WIDTH / 2.0,
            SETTINGS_TOP + index as f32 * SETTINGS_SPACING,
        ),
        SETTINGS_ENTRY_SIZE,
    )
}

/// Index of the settings entry under `pos`, if any
pub fn settings_hit(pos: Vec2) -> Option<usize> {
    (0..SETTINGS_OPTIONS.len()).find(|&i| settings_entry_rect(i).contains(pos))
}

fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::RED,
        PlayerColor::Blue => Color::BLUE,
    }
}

/// Main menu with hover highlight under the mouse
pub fn draw_menu(renderer: &mut dyn Renderer, mouse: Vec2) {
    for (i, label) in MENU_OPTIONS.iter().enumerate() {
        let rect = menu_entry_rect(i);
        if rect.contains(mouse) {
            renderer.draw_rect(rect, Color::HOVER);
        }
        renderer.draw_text(label, rect.min.x, rect.min.y);
    }
}

/// Settings list plus both players' binding tables
pub fn draw_settings(renderer: &mut dyn Renderer, mouse: Vec2, settings: &Settings) {
    for (i, label) in SETTINGS_OPTIONS.iter().enumerate() {
        let rect = settings_entry_rect(i);
        if rect.contains(mouse) {
            renderer.draw_rect(rect, Color::HOVER);
        }
        renderer.draw_text(label, rect.min.x, rect.min.y);
    }

    draw_bindings(
        renderer,
        "Player 1 Key Bindings:",
        &settings.player1_keys,
        CANVAS_WIDTH / 8.0,
    );
    draw_bindings(
        renderer,
        "Player 2 Key Bindings:",
        &settings.player2_keys,
        CANVAS_WIDTH / 2.0,
    );
}

fn draw_bindings(renderer: &mut dyn Renderer, title: &str, bindings: &KeyBindings, x: f32) {
    let mut y = 300.0;
    renderer.draw_text(title, x, y);
    for (key, direction) in bindings.entries() {
        y += 30.0;
        renderer.draw_text(&format!("{direction:?}: {key}"), x, y);
    }
}

pub fn draw_instructions(renderer: &mut dyn Renderer) {
    renderer.draw_text("Instructions", CANVAS_WIDTH / 2.0 - 80.0, 120.0);
    for (i, line) in INSTRUCTION_LINES.iter().enumerate() {
        renderer.draw_text(line, CANVAS_WIDTH / 2.0 - 280.0, 220.0 + i as f32 * 45.0);
    }
}

/// The play scene: background, both trails, both markers, death HUD
pub fn draw_game(renderer: &mut dyn Renderer, world: &World) {
    renderer.draw_background();
    for player in &world.players {
        draw_trail(renderer, player);
    }
    for player in &world.players {
        renderer.draw_rect(player.bounds(), player_color(player.color));
    }
    renderer.draw_text(
        &format!("Player 1 Deaths: {}", world.players[0].death_count),
        10.0,
        35.0,
    );
    renderer.draw_text(
        &format!("Player 2 Deaths: {}", world.players[1].death_count),
        CANVAS_WIDTH - 200.0,
        35.0,
    );
}

/// Trail polyline; the safe-zone suffix draws in its own tint
fn draw_trail(renderer: &mut dyn Renderer, player: &Player) {
    let samples = player.trail.samples();
    if samples.len() < 2 {
        return;
    }
    let safe_start = samples.len().saturating_sub(SAFE_ZONE_SAMPLES);
    for i in 0..samples.len() - 1 {
        let color = if i >= safe_start {
            Color::GREEN
        } else {
            player_color(player.color)
        };
        renderer.draw_trail_segment(samples[i].pos, samples[i + 1].pos, color, TRAIL_WIDTH);
    }
}

pub fn draw_pause_overlay(renderer: &mut dyn Renderer) {
    renderer.draw_text(
        "Paused - ESC to Resume, Backspace for Menu",
        CANVAS_WIDTH / 2.0 - 200.0,
        CANVAS_HEIGHT / 2.0,
    );
}
