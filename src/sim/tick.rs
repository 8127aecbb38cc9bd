//! Fixed period simulation tick
//!
//! Advances the arena by one step. Order matters: player, projectiles,
//! hostiles (with contact), hits, effects.

use glam::Vec2;

use super::collision::{in_arena, within_square};
use super::state::{Effect, GameEvent, GameState, Player, RespawnOutcome};
use crate::consts::*;
use crate::{clamp_to_arena, direction_between};

impl GameState {
    /// Advance the arena by one tick, returning what happened
    pub fn advance(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.time_ticks += 1;

        if !self.terminal {
            self.move_player();
        }

        self.move_projectiles();

        if !self.terminal {
            self.move_hostiles(&mut events);
        }

        // A defeat this tick freezes hit resolution too
        if !self.terminal {
            self.resolve_hits(&mut events);
        }

        self.decay_effects();

        events
    }

    fn move_player(&mut self) {
        // Axes sum independently, so diagonals are faster
        let delta: Vec2 = self.held.iter().map(|dir| dir.delta()).sum();
        let next = self.player.pos + delta * self.player.speed;
        self.player.pos = clamp_to_arena(next, self.player.size);
    }

    fn move_projectiles(&mut self) {
        for shot in &mut self.projectiles {
            shot.pos += shot.vel;
        }
        self.projectiles.retain(|shot| in_arena(shot.pos));
    }

    fn move_hostiles(&mut self, events: &mut Vec<GameEvent>) {
        let target = self.player.pos;

        for hostile in &mut self.hostiles {
            let approach = direction_between(hostile.pos, target);
            if let Some(dir) = approach {
                hostile.pos += dir * HOSTILE_SPEED;
            }

            if !within_square(hostile.pos, target, CONTACT_THRESHOLD) {
                continue;
            }

            self.player.health = self.player.health.saturating_sub(1);
            events.push(GameEvent::PlayerHurt {
                health: self.player.health,
            });
            if let Some(dir) = approach {
                hostile.pos -= dir * KNOCKBACK_DISTANCE;
            }

            if self.player.health == 0 {
                self.terminal = true;
                events.push(GameEvent::PlayerDefeated);
                log::info!(
                    "Player defeated at tick {} with score {}",
                    self.time_ticks,
                    self.score
                );
                break;
            }
        }
    }

    fn resolve_hits(&mut self, events: &mut Vec<GameEvent>) {
        // Mark consumed projectiles, compact afterwards
        let mut consumed = vec![false; self.projectiles.len()];

        for hostile in &mut self.hostiles {
            let hit = self.projectiles.iter().zip(&consumed).position(|(shot, used)| {
                !*used && within_square(shot.pos, hostile.pos, HIT_THRESHOLD)
            });
            let Some(index) = hit else {
                continue;
            };

            consumed[index] = true;
            hostile.hits = hostile.hits.saturating_sub(1);
            self.effects.push(Effect::new(hostile.pos));

            if hostile.hits == 0 {
                log::debug!("Hostile {} defeated", hostile.id);
                events.push(GameEvent::HostileDefeated { id: hostile.id });
            } else {
                events.push(GameEvent::HostileHit {
                    id: hostile.id,
                    hits_left: hostile.hits,
                });
            }
        }

        let before = self.hostiles.len();
        self.hostiles.retain(|hostile| hostile.hits > 0);
        self.score += (before - self.hostiles.len()) as u64;

        let mut flags = consumed.into_iter();
        self.projectiles.retain(|_| !flags.next().unwrap_or(false));
    }

    fn decay_effects(&mut self) {
        for effect in &mut self.effects {
            effect.lifetime = effect.lifetime.saturating_sub(1);
            effect.radius = (effect.radius - EFFECT_SHRINK).max(0.0);
        }
        self.effects.retain(|effect| effect.lifetime > 0);
    }

    /// Replace the wave with a tougher one. Does nothing while terminal.
    pub fn respawn_wave(&mut self) -> RespawnOutcome {
        if self.terminal {
            return RespawnOutcome::Suspended;
        }
        self.base_hits += 1;
        self.spawn_wave();
        RespawnOutcome::Spawned {
            base_hits: self.base_hits,
        }
    }

    /// Restore the initial lifecycle values and start a fresh first wave
    pub fn reset(&mut self) {
        self.score = 0;
        self.player = Player::default();
        self.projectiles.clear();
        self.effects.clear();
        self.held.clear();
        self.base_hits = INITIAL_BASE_HITS;
        self.terminal = false;
        self.spawn_wave();
        log::info!("Arena reset");
    }
}
