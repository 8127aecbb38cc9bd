//! SAV Converter - save file conversion front-end with a credits minigame
//!
//! Core modules:
//! - `sim`: Deterministic arena simulation (entities, ticks, collisions)
//! - `minigame`: Host loop driving the simulation from a scheduler
//! - `renderer`: Snapshot to vertex data
//! - `platform`: Timer scheduling
//! - `convert`: External converter invocation
//! - `app`: Application context (settings + converter)

pub mod app;
pub mod convert;
pub mod minigame;
pub mod platform;
pub mod progress;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::AppContext;
pub use convert::{ConversionMode, ConvertError, Converter};
pub use minigame::Minigame;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period (ms)
    pub const TICK_MS: u64 = 30;
    /// Wave respawn period (ms)
    pub const RESPAWN_INTERVAL_MS: u64 = 20_000;
    /// Respawn retry while the arena is in its terminal state (ms)
    pub const RESPAWN_RETRY_MS: u64 = 500;
    /// How long the final frame is held before a reset (ms)
    pub const RESET_DELAY_MS: u64 = 2_000;
    /// Largest frame delta the host will simulate at once
    pub const MAX_FRAME_MS: u64 = 250;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 300.0;
    pub const ARENA_HEIGHT: f32 = 300.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: u32 = 5;

    /// Hostile defaults
    pub const HOSTILE_SIZE: f32 = 20.0;
    pub const HOSTILE_SPEED: f32 = 1.2;
    pub const HOSTILE_COUNT: usize = 5;
    pub const INITIAL_BASE_HITS: u32 = 1;
    /// Square proximity (per axis) for hostile/player contact
    pub const CONTACT_THRESHOLD: f32 = 20.0;
    pub const KNOCKBACK_DISTANCE: f32 = 20.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 8.0;
    /// Square proximity (per axis) for projectile/hostile hits
    pub const HIT_THRESHOLD: f32 = 15.0;

    /// Hit marker defaults
    pub const EFFECT_RADIUS: f32 = 10.0;
    pub const EFFECT_SHRINK: f32 = 1.0;
    pub const EFFECT_LIFETIME: u32 = 10;
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide
/// or the distance is not finite
#[inline]
pub fn direction_between(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Clamp a square's top-left corner so the square stays inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: f32) -> Vec2 {
    use consts::{ARENA_HEIGHT, ARENA_WIDTH};
    Vec2::new(
        pos.x.clamp(0.0, ARENA_WIDTH - size),
        pos.y.clamp(0.0, ARENA_HEIGHT - size),
    )
}
