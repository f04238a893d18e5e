//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only, one update per tick
//! - Time enters as an explicit `now` parameter, never read ambiently
//! - Players update in a fixed order (player 1 before player 2)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{box_hits_trail, segment_rect};
pub use state::{Direction, Player, PlayerColor, Trail, TrailSample, World};
pub use tick::{TickInput, tick};
