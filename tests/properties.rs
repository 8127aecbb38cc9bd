//! Arena invariants under arbitrary input

use proptest::prelude::*;

use sav_converter::consts::*;
use sav_converter::sim::{Direction, GameState, in_arena};

/// One frame of player input
#[derive(Debug, Clone)]
struct Frame {
    key: usize,
    press: bool,
    fire: Option<(f32, f32)>,
}

fn frame() -> impl Strategy<Value = Frame> {
    (
        0..Direction::ALL.len(),
        any::<bool>(),
        prop::option::of((-50.0f32..350.0, -50.0f32..350.0)),
    )
        .prop_map(|(key, press, fire)| Frame { key, press, fire })
}

proptest! {
    #[test]
    fn player_and_projectiles_stay_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame(), 1..300),
    ) {
        let mut state = GameState::new(seed);
        for f in &frames {
            let code = Direction::ALL[f.key].key_name();
            if f.press {
                state.key_down(code);
            } else {
                state.key_up(code);
            }
            if let Some((x, y)) = f.fire {
                state.fire(x, y);
            }
            state.advance();

            let pos = state.player.pos;
            prop_assert!(pos.x >= 0.0 && pos.x <= ARENA_WIDTH - PLAYER_SIZE);
            prop_assert!(pos.y >= 0.0 && pos.y <= ARENA_HEIGHT - PLAYER_SIZE);
            for shot in &state.projectiles {
                prop_assert!(in_arena(shot.pos));
            }
        }
    }

    #[test]
    fn health_and_score_move_one_way(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame(), 1..300),
    ) {
        let mut state = GameState::new(seed);
        let mut health = state.player.health;
        let mut score = state.score;
        for f in &frames {
            if let Some((x, y)) = f.fire {
                state.fire(x, y);
            }
            let hostiles_before = state.hostiles.len();
            state.advance();

            prop_assert!(state.player.health <= health);
            prop_assert!(health - state.player.health <= hostiles_before as u32);
            prop_assert_eq!(state.terminal, state.player.health == 0);
            prop_assert_eq!(state.score - score, (hostiles_before - state.hostiles.len()) as u64);
            prop_assert!(state.hostiles.iter().all(|h| h.hits >= 1));

            health = state.player.health;
            score = state.score;
            if state.terminal {
                break;
            }
        }
    }

    #[test]
    fn fire_spawns_one_projectile_at_fixed_speed(
        seed in any::<u64>(),
        x in 0.0f32..300.0,
        y in 0.0f32..300.0,
    ) {
        let mut state = GameState::new(seed);
        let center = state.player.center();
        prop_assume!(center.x != x || center.y != y);

        prop_assert!(state.fire(x, y));
        prop_assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        prop_assert_eq!(shot.pos, center);
        prop_assert!((shot.vel.length() - PROJECTILE_SPEED).abs() < 1e-3);
        let to_target = glam::Vec2::new(x, y) - center;
        prop_assert!(shot.vel.perp_dot(to_target).abs() <= 1e-3 * to_target.length() * PROJECTILE_SPEED);
        prop_assert!(shot.vel.dot(to_target) > 0.0);
    }

    #[test]
    fn respawns_raise_toughness(seed in any::<u64>(), respawns in 0u32..20) {
        let mut state = GameState::new(seed);
        for _ in 0..respawns {
            state.respawn_wave();
        }
        prop_assert_eq!(state.base_hits, INITIAL_BASE_HITS + respawns);
        prop_assert_eq!(state.hostiles.len(), HOSTILE_COUNT);
        prop_assert!(state.hostiles.iter().all(|h| h.hits == INITIAL_BASE_HITS + respawns));
    }
}
