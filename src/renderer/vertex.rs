//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.05, 0.05, 0.08, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 0.85, 0.2, 1.0]; // Yellow fish
    pub const PLAYER_DEFEATED: [f32; 4] = [0.4, 0.35, 0.2, 1.0];
    pub const HOSTILE: [f32; 4] = [0.9, 0.25, 0.25, 1.0];
    pub const HOSTILE_TOUGH: [f32; 4] = [0.55, 0.1, 0.6, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EFFECT: [f32; 4] = [1.0, 0.6, 0.1, 0.8];
    pub const HEALTH: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const HEALTH_LOST: [f32; 4] = [0.25, 0.1, 0.1, 1.0];
}

/// Linear blend between two colors
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
