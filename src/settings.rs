//! Per-session configuration
//!
//! Resolved once at startup and treated as immutable by the simulation;
//! the only piece the app flips at runtime is the fullscreen flag.

use serde::{Deserialize, Serialize};

use crate::platform::Key;
use crate::sim::Direction;

/// One player's steering table.
///
/// Array index order is the steering tie-break: when several bound keys are
/// held in the same tick, entries are applied in order and later ones win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    entries: [(Key, Direction); 4],
}

impl KeyBindings {
    pub fn new(entries: [(Key, Direction); 4]) -> Self {
        Self { entries }
    }

    /// Arrow-key table (player 1 default)
    pub fn arrows() -> Self {
        Self::new([
            (Key::Left, Direction::Left),
            (Key::Right, Direction::Right),
            (Key::Up, Direction::Up),
            (Key::Down, Direction::Down),
        ])
    }

    /// WASD table (player 2 default)
    pub fn wasd() -> Self {
        Self::new([
            (Key::Char('a'), Direction::Left),
            (Key::Char('d'), Direction::Right),
            (Key::Char('w'), Direction::Up),
            (Key::Char('s'), Direction::Down),
        ])
    }

    /// Resolve held keys to directions, in binding order
    pub fn held_directions(&self, held: &[Key]) -> Vec<Direction> {
        self.entries
            .iter()
            .filter(|(key, _)| held.contains(key))
            .map(|&(_, dir)| dir)
            .collect()
    }

    /// Binding rows for display (settings screen)
    pub fn entries(&self) -> impl Iterator<Item = (Key, Direction)> + '_ {
        self.entries.iter().copied()
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Player 1 steering table
    pub player1_keys: KeyBindings,
    /// Player 2 steering table
    pub player2_keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            player1_keys: KeyBindings::arrows(),
            player2_keys: KeyBindings::wasd(),
        }
    }
}

impl Settings {
    /// Load settings from `TRAIL_DUEL_CONFIG` or `config/settings.json`,
    /// falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("TRAIL_DUEL_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(settings) = serde_json::from_str::<Self>(&contents)
        {
            log::info!("Loaded settings from {path}");
            return settings;
        }
        if let Ok(contents) = std::fs::read_to_string("config/settings.json")
            && let Ok(settings) = serde_json::from_str::<Self>(&contents)
        {
            log::info!("Loaded settings from config/settings.json");
            return settings;
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_directions_binding_order() {
        let bindings = KeyBindings::arrows();
        // Held set order does not matter; binding table order does
        let held = [Key::Down, Key::Left];
        let dirs = bindings.held_directions(&held);
        assert_eq!(dirs, vec![Direction::Left, Direction::Down]);
    }

    #[test]
    fn test_held_directions_ignores_unbound() {
        let bindings = KeyBindings::wasd();
        let held = [Key::Escape, Key::Char('w'), Key::F11];
        assert_eq!(bindings.held_directions(&held), vec![Direction::Up]);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fullscreen, settings.fullscreen);
        let dirs: Vec<_> = back.player2_keys.entries().collect();
        assert_eq!(dirs[0], (Key::Char('a'), Direction::Left));
    }
}
