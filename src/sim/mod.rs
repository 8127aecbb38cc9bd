//! Deterministic arena simulation
//!
//! All minigame logic lives here. This module must stay pure:
//! - One fixed step per `advance()` call
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering, timers, or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{in_arena, within_square};
pub use input::Direction;
pub use state::{
    Effect, GameEvent, GameState, Hostile, Player, Projectile, RespawnOutcome, Snapshot,
    arena_center,
};
