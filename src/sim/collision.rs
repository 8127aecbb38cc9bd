//! Proximity and bounds checks
//!
//! The arena uses axis-aligned "square" proximity: two points touch when they
//! are closer than a threshold on both axes independently.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// True when `a` and `b` are strictly closer than `threshold` on both axes
#[inline]
pub fn within_square(a: Vec2, b: Vec2, threshold: f32) -> bool {
    let d = (a - b).abs();
    d.x < threshold && d.y < threshold
}

/// True when `pos` lies inside the arena, edges included
#[inline]
pub fn in_arena(pos: Vec2) -> bool {
    (0.0..=ARENA_WIDTH).contains(&pos.x) && (0.0..=ARENA_HEIGHT).contains(&pos.y)
}
