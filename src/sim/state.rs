//! Game state and core simulation types
//!
//! Every entity is owned by `GameState`; nothing outside the simulation holds
//! references to them except through a `Snapshot`.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::Direction;
use crate::consts::*;

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub health: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            health: MAX_HEALTH,
        }
    }
}

impl Player {
    /// Center of the player's square (projectile origin)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// An enemy that chases the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    /// Hits left before removal (always >= 1 while alive)
    pub hits: u32,
}

/// A shot fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Shrinking hit marker (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks left
    pub lifetime: u32,
}

impl Effect {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: EFFECT_RADIUS,
            lifetime: EFFECT_LIFETIME,
        }
    }
}

/// Things that happened during a tick, for the host and for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A hostile touched the player
    PlayerHurt { health: u32 },
    /// Health hit zero; the arena is now terminal
    PlayerDefeated,
    /// A projectile hit a hostile that survived
    HostileHit { id: u32, hits_left: u32 },
    /// A hostile ran out of hits and was removed
    HostileDefeated { id: u32 },
}

/// Result of a respawn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnOutcome {
    /// A new wave replaced the old one
    Spawned { base_hits: u32 },
    /// Arena is terminal; try again later
    Suspended,
}

/// Complete arena state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Player,
    /// Live hostiles, in spawn order
    pub hostiles: Vec<Hostile>,
    /// Live projectiles, in fire order
    pub projectiles: Vec<Projectile>,
    pub effects: Vec<Effect>,
    pub score: u64,
    /// Toughness shared by every hostile of the current wave
    pub base_hits: u32,
    /// Health ran out; gameplay frozen until reset
    pub terminal: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Direction keys currently held
    pub(crate) held: BTreeSet<Direction>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new arena with the first wave already spawned
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            player: Player::default(),
            hostiles: Vec::with_capacity(HOSTILE_COUNT),
            projectiles: Vec::new(),
            effects: Vec::new(),
            score: 0,
            base_hits: INITIAL_BASE_HITS,
            terminal: false,
            time_ticks: 0,
            held: BTreeSet::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        state.spawn_wave();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the hostile set with `HOSTILE_COUNT` fresh hostiles at `base_hits`
    pub(crate) fn spawn_wave(&mut self) {
        self.hostiles.clear();
        for _ in 0..HOSTILE_COUNT {
            let x = self.rng.random_range(0.0..=ARENA_WIDTH - HOSTILE_SIZE);
            let y = self.rng.random_range(0.0..=ARENA_HEIGHT - HOSTILE_SIZE);
            let id = self.next_entity_id();
            self.hostiles.push(Hostile {
                id,
                pos: Vec2::new(x, y),
                hits: self.base_hits,
            });
        }
        log::info!(
            "Spawned wave of {} hostiles ({} hits each)",
            self.hostiles.len(),
            self.base_hits
        );
    }

    /// Directions currently held
    pub fn held_keys(&self) -> impl Iterator<Item = Direction> + '_ {
        self.held.iter().copied()
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            hostiles: &self.hostiles,
            projectiles: &self.projectiles,
            effects: &self.effects,
            score: self.score,
            health: self.player.health,
            base_hits: self.base_hits,
            terminal: self.terminal,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub hostiles: &'a [Hostile],
    pub projectiles: &'a [Projectile],
    pub effects: &'a [Effect],
    pub score: u64,
    pub health: u32,
    pub base_hits: u32,
    pub terminal: bool,
}

/// Player start position
pub fn arena_center() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}
