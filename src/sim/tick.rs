//! One fixed-rate simulation step
//!
//! Ordering per tick: steer + advance both players, update both trails,
//! then evaluate both collision verdicts against the fully updated
//! snapshot before applying any reset. Neither player's verdict can depend
//! on the update order, and a double crash still counts once per player.

use super::state::{Direction, World};

/// Steering input for a single tick, already resolved through each
/// player's binding table (binding order preserved — it is the tie-break
/// when several bound keys are held).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub player1_held: Vec<Direction>,
    pub player2_held: Vec<Direction>,
}

/// Advance the world by one tick at time `now` (seconds).
///
/// Returns true when a crash happened this tick. A crash by either player
/// resets both and increments both death counters by exactly one; the round
/// restarts from the spawn points with cleared trails.
pub fn tick(world: &mut World, input: &TickInput, now: f64) -> bool {
    let held = [&input.player1_held, &input.player2_held];
    for (player, held) in world.players.iter_mut().zip(held) {
        player.steer(held);
        player.advance();
        player.update_trail(true, now);
    }

    let crashed = {
        let [p1, p2] = &world.players;
        p1.check_collision(&p2.trail) || p2.check_collision(&p1.trail)
    };

    if crashed {
        for player in &mut world.players {
            player.death_count += 1;
            player.reset();
        }
    }

    crashed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CANVAS_HEIGHT, PLAYER_HEIGHT, SAFE_ZONE_SAMPLES};
    use glam::Vec2;

    const DT: f64 = 1.0 / 60.0;

    fn run_ticks(world: &mut World, input: &TickInput, ticks: u32) -> bool {
        let mut crashed = false;
        for i in 0..ticks {
            crashed |= tick(world, input, i as f64 * DT);
        }
        crashed
    }

    #[test]
    fn test_players_drift_up_without_input() {
        let mut world = World::new();
        let spawn_y = CANVAS_HEIGHT - PLAYER_HEIGHT - 100.0;
        let crashed = run_ticks(&mut world, &TickInput::default(), 10);
        assert!(!crashed);
        for player in &world.players {
            assert_eq!(player.pos.y, spawn_y - 30.0);
            assert_eq!(player.trail.len(), 10);
        }
    }

    #[test]
    fn test_trail_grows_one_sample_per_tick() {
        let mut world = World::new();
        run_ticks(&mut world, &TickInput::default(), 5);
        assert_eq!(world.players[0].trail.len(), 5);
        // Newest sample sits at the marker center
        let p = &world.players[0];
        assert_eq!(p.trail.samples().last().unwrap().pos, p.center());
    }

    #[test]
    fn test_steering_applies_to_the_right_player() {
        let mut world = World::new();
        let input = TickInput {
            player1_held: vec![Direction::Left],
            player2_held: vec![Direction::Right],
        };
        run_ticks(&mut world, &input, 5);
        assert_eq!(world.players[0].facing, Direction::Left);
        assert_eq!(world.players[1].facing, Direction::Right);
        assert_eq!(world.players[0].pos.x, 800.0 - 15.0);
        assert_eq!(world.players[1].pos.x, 100.0 + 15.0);
    }

    /// Seed a trail whose collidable head covers `target`, padded with
    /// far-away safe-zone samples so the collidable part stays collidable.
    fn seed_trail_over(world: &mut World, player_idx: usize, target: Vec2, now: f64) {
        let trail = &mut world.players[player_idx].trail;
        trail.append(target, now);
        trail.append(target + Vec2::new(3.0, 0.0), now);
        for _ in 0..SAFE_ZONE_SAMPLES {
            trail.append(Vec2::new(900.0, 20.0), now);
        }
    }

    #[test]
    fn test_single_crash_resets_and_counts_both() {
        let mut world = World::new();
        // Player 1 will step onto player 2's old trail; player 2 is clear
        let p1_next_center = world.players[0].center() + Vec2::new(0.0, -3.0);
        seed_trail_over(&mut world, 1, p1_next_center, 0.0);

        let crashed = tick(&mut world, &TickInput::default(), DT);
        assert!(crashed);
        for player in &world.players {
            assert_eq!(player.death_count, 1);
            assert!(player.trail.is_empty());
        }
        // Back at spawn
        assert_eq!(world.players[0].pos.x, 800.0);
        assert_eq!(world.players[1].pos.x, 100.0);
    }

    #[test]
    fn test_simultaneous_crash_counts_once_per_player() {
        let mut world = World::new();
        let p1_next_center = world.players[0].center() + Vec2::new(0.0, -3.0);
        let p2_next_center = world.players[1].center() + Vec2::new(0.0, -3.0);
        seed_trail_over(&mut world, 1, p1_next_center, 0.0);
        seed_trail_over(&mut world, 0, p2_next_center, 0.0);

        let crashed = tick(&mut world, &TickInput::default(), DT);
        assert!(crashed);
        for player in &world.players {
            assert_eq!(player.death_count, 1);
            assert!(player.trail.is_empty());
        }
    }

    #[test]
    fn test_no_crash_on_clear_board() {
        let mut world = World::new();
        let crashed = run_ticks(&mut world, &TickInput::default(), 60);
        assert!(!crashed);
        assert_eq!(world.players[0].death_count, 0);
    }
}
