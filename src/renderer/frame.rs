//! Snapshot to frame geometry
//!
//! Draw order: background, effects, hostiles, projectiles, player, HUD.
//! Output is in world coordinates; `to_clip_space` converts for a GPU.

use glam::Vec2;

use super::shapes::{circle, rect, ring};
use super::vertex::{Vertex, colors, mix};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, HOSTILE_SIZE, MAX_HEALTH};
use crate::sim::Snapshot;

const PROJECTILE_RADIUS: f32 = 3.0;
const PROJECTILE_SEGMENTS: u32 = 8;
const EFFECT_SEGMENTS: u32 = 16;
const EFFECT_RING_WIDTH: f32 = 2.0;
/// Hit count at which hostiles reach the "tough" tint
const TOUGH_HITS: u32 = 5;

const HEALTH_PIP: Vec2 = Vec2::new(10.0, 4.0);
const HEALTH_GAP: f32 = 2.0;
const HUD_MARGIN: f32 = 4.0;

/// Build the triangle list for one frame
pub fn build_frame(snapshot: &Snapshot<'_>) -> Vec<Vertex> {
    let mut vertices = rect(
        Vec2::ZERO,
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
        colors::BACKGROUND,
    );

    for effect in snapshot.effects.iter().filter(|e| e.radius > 0.0) {
        let inner = (effect.radius - EFFECT_RING_WIDTH).max(0.0);
        vertices.extend(ring(
            effect.pos,
            inner,
            effect.radius,
            colors::EFFECT,
            EFFECT_SEGMENTS,
        ));
    }

    for hostile in snapshot.hostiles {
        let toughness = hostile.hits.saturating_sub(1) as f32 / (TOUGH_HITS - 1) as f32;
        let color = mix(colors::HOSTILE, colors::HOSTILE_TOUGH, toughness);
        vertices.extend(rect(hostile.pos, Vec2::splat(HOSTILE_SIZE), color));
    }

    for shot in snapshot.projectiles {
        vertices.extend(circle(
            shot.pos,
            PROJECTILE_RADIUS,
            colors::PROJECTILE,
            PROJECTILE_SEGMENTS,
        ));
    }

    let player_color = if snapshot.terminal {
        colors::PLAYER_DEFEATED
    } else {
        colors::PLAYER
    };
    vertices.extend(rect(
        snapshot.player.pos,
        Vec2::splat(snapshot.player.size),
        player_color,
    ));

    // Health pips, one per point of max health
    for i in 0..MAX_HEALTH {
        let x = HUD_MARGIN + i as f32 * (HEALTH_PIP.x + HEALTH_GAP);
        let color = if i < snapshot.health {
            colors::HEALTH
        } else {
            colors::HEALTH_LOST
        };
        vertices.extend(rect(Vec2::new(x, HUD_MARGIN), HEALTH_PIP, color));
    }

    vertices
}

/// Convert world coordinates (origin top-left, y down) to clip space
pub fn to_clip_space(vertices: &mut [Vertex]) {
    for v in vertices {
        let [x, y] = v.position;
        v.position = [x / ARENA_WIDTH * 2.0 - 1.0, 1.0 - y / ARENA_HEIGHT * 2.0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Effect, GameState};

    #[test]
    fn test_frame_vertex_budget() {
        let mut state = GameState::new(8);
        state.fire(0.0, 0.0);
        state.effects.push(Effect::new(Vec2::new(40.0, 40.0)));

        let verts = build_frame(&state.snapshot());
        let expected = 6 // background
            + EFFECT_SEGMENTS as usize * 6
            + state.hostiles.len() * 6
            + PROJECTILE_SEGMENTS as usize * 3
            + 6 // player
            + MAX_HEALTH as usize * 6;
        assert_eq!(verts.len(), expected);
    }

    #[test]
    fn test_spent_effects_not_drawn() {
        let mut state = GameState::new(8);
        let baseline = build_frame(&state.snapshot()).len();
        state.effects.push(Effect {
            pos: Vec2::ZERO,
            radius: 0.0,
            lifetime: 1,
        });
        assert_eq!(build_frame(&state.snapshot()).len(), baseline);
    }

    #[test]
    fn test_terminal_dims_player_and_health() {
        let mut state = GameState::new(8);
        state.player.health = 0;
        state.terminal = true;
        let verts = build_frame(&state.snapshot());

        assert!(verts.iter().any(|v| v.color == colors::PLAYER_DEFEATED));
        assert!(!verts.iter().any(|v| v.color == colors::HEALTH));
    }

    #[test]
    fn test_clip_space_corners() {
        let mut verts = vec![
            Vertex::new(0.0, 0.0, [1.0; 4]),
            Vertex::new(ARENA_WIDTH, ARENA_HEIGHT, [1.0; 4]),
        ];
        to_clip_space(&mut verts);
        assert_eq!(verts[0].position, [-1.0, 1.0]);
        assert_eq!(verts[1].position, [1.0, -1.0]);
    }
}
