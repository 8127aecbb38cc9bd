//! Credits-screen minigame host
//!
//! Owns the arena and drives it from a single clock: the tick, wave respawn,
//! and post-defeat reset are one-shot timers that the host re-arms itself.

use std::time::Duration;

use glam::Vec2;

use crate::consts::*;
use crate::platform::Scheduler;
use crate::sim::{Direction, GameEvent, GameState, RespawnOutcome, Snapshot};

/// Ticks between autopilot shots
const AUTOPILOT_FIRE_TICKS: u32 = 6;
/// Autopilot backs away from hostiles closer than this
const AUTOPILOT_EVADE_RADIUS: f32 = 80.0;

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tick,
    Respawn,
    Reset,
}

/// Minigame instance holding all state
pub struct Minigame {
    state: GameState,
    scheduler: Scheduler<TimerKind>,
    /// Host clock in microseconds (frame deltas rarely land on whole ms)
    clock_us: u64,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
    fire_cooldown: u32,
    shots_fired: u64,
}

impl Minigame {
    pub fn new(seed: u64) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(0, TICK_MS, TimerKind::Tick);
        scheduler.schedule_after(0, RESPAWN_INTERVAL_MS, TimerKind::Respawn);
        log::info!("Minigame started with seed {}", seed);

        Self {
            state: GameState::new(seed),
            scheduler,
            clock_us: 0,
            autopilot: false,
            fire_cooldown: 0,
            shots_fired: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Host clock in whole milliseconds
    pub fn clock_ms(&self) -> u64 {
        self.clock_us / 1000
    }

    /// Projectiles fired through this host (player and autopilot)
    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }

    pub fn key_down(&mut self, code: &str) {
        self.state.key_down(code);
    }

    pub fn key_up(&mut self, code: &str) {
        self.state.key_up(code);
    }

    pub fn fire(&mut self, x: f32, y: f32) -> bool {
        let fired = self.state.fire(x, y);
        if fired {
            self.shots_fired += 1;
        }
        fired
    }

    /// Advance the clock and run every timer that came due, in order
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let elapsed_us = elapsed.as_micros().min(u128::from(MAX_FRAME_MS) * 1000) as u64;
        self.clock_us += elapsed_us;
        let now = self.clock_ms();

        let mut events = Vec::new();
        while let Some(timer) = self.scheduler.pop_due(now) {
            match timer.payload {
                TimerKind::Tick => {
                    if self.autopilot {
                        self.steer();
                    }
                    let tick_events = self.state.advance();
                    if tick_events.contains(&GameEvent::PlayerDefeated) {
                        self.scheduler
                            .schedule_after(timer.due_ms, RESET_DELAY_MS, TimerKind::Reset);
                    }
                    events.extend(tick_events);
                    self.scheduler
                        .schedule_after(timer.due_ms, TICK_MS, TimerKind::Tick);
                }
                TimerKind::Respawn => {
                    let delay = match self.state.respawn_wave() {
                        RespawnOutcome::Spawned { .. } => RESPAWN_INTERVAL_MS,
                        RespawnOutcome::Suspended => RESPAWN_RETRY_MS,
                    };
                    self.scheduler
                        .schedule_after(timer.due_ms, delay, TimerKind::Respawn);
                }
                TimerKind::Reset => {
                    self.state.reset();
                    // The new run gets a full interval at base toughness
                    self.scheduler.cancel(|kind| *kind == TimerKind::Respawn);
                    self.scheduler.schedule_after(
                        timer.due_ms,
                        RESPAWN_INTERVAL_MS,
                        TimerKind::Respawn,
                    );
                }
            }
        }

        events
    }

    /// Autopilot: shoot the nearest hostile, back away when it gets close
    fn steer(&mut self) {
        if self.state.terminal {
            return;
        }

        let me = self.state.player.center();
        let nearest = self
            .state
            .hostiles
            .iter()
            .map(|h| h.pos + Vec2::splat(HOSTILE_SIZE / 2.0))
            .min_by(|a, b| {
                a.distance_squared(me)
                    .partial_cmp(&b.distance_squared(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let mut wanted = Vec::new();
        if let Some(target) = nearest {
            if self.fire_cooldown == 0 && self.fire(target.x, target.y) {
                self.fire_cooldown = AUTOPILOT_FIRE_TICKS;
            }

            let away = me - target;
            if away.length() < AUTOPILOT_EVADE_RADIUS {
                if away.x < 0.0 {
                    wanted.push(Direction::Left);
                } else if away.x > 0.0 {
                    wanted.push(Direction::Right);
                }
                if away.y < 0.0 {
                    wanted.push(Direction::Up);
                } else if away.y > 0.0 {
                    wanted.push(Direction::Down);
                }
            }
        }
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);

        let held: Vec<Direction> = self.state.held_keys().collect();
        for dir in held.iter().filter(|dir| !wanted.contains(dir)) {
            self.state.key_up(dir.key_name());
        }
        for dir in wanted.iter().filter(|dir| !held.contains(dir)) {
            self.state.key_down(dir.key_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Hostile;

    /// Step the host in small frames
    fn run_for(game: &mut Minigame, ms: u64) {
        for _ in 0..ms / 10 {
            game.update(Duration::from_millis(10));
        }
    }

    /// Host whose player cannot die during a test
    fn immortal(seed: u64) -> Minigame {
        let mut game = Minigame::new(seed);
        game.state.player.health = u32::MAX;
        game
    }

    #[test]
    fn test_ticks_on_fixed_period() {
        let mut game = immortal(1);
        game.update(Duration::from_millis(29));
        assert_eq!(game.state().time_ticks, 0);
        game.update(Duration::from_millis(1));
        assert_eq!(game.state().time_ticks, 1);

        // 60 fps frames accumulate sub-millisecond remainders
        let mut game = immortal(1);
        for _ in 0..60 {
            game.update(Duration::from_micros(16_667));
        }
        assert_eq!(game.clock_ms(), 1000);
        assert_eq!(game.state().time_ticks, 33);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game = immortal(1);
        game.update(Duration::from_secs(5));
        assert_eq!(game.clock_ms(), MAX_FRAME_MS);
        assert_eq!(game.state().time_ticks, MAX_FRAME_MS / TICK_MS);
    }

    // The respawn timer repeats on a genuine 20 s interval; it must not
    // collapse into a tight loop after the first firing.
    #[test]
    fn test_respawn_repeats_on_fixed_interval() {
        let mut game = immortal(2);
        run_for(&mut game, RESPAWN_INTERVAL_MS - 10);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS);

        run_for(&mut game, 10);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 1);

        run_for(&mut game, 100);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 1);

        run_for(&mut game, 2 * RESPAWN_INTERVAL_MS - 100);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 3);
        assert!(game.state().hostiles.iter().all(|h| h.hits <= INITIAL_BASE_HITS + 3));
    }

    #[test]
    fn test_respawn_retries_while_terminal() {
        let mut game = immortal(3);
        run_for(&mut game, 19_000);
        game.state.terminal = true;

        run_for(&mut game, 1_750);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS);

        // Next retry lands at 21.0 s
        game.state.terminal = false;
        run_for(&mut game, 250);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 1);

        // And the interval restarts from the successful respawn
        run_for(&mut game, RESPAWN_INTERVAL_MS - 10);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 1);
        run_for(&mut game, 10);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 2);
    }

    #[test]
    fn test_defeat_holds_then_resets() {
        let mut game = Minigame::new(4);
        game.state.player.health = 1;
        game.state.score = 7;
        let player = game.state.player.pos;
        game.state.hostiles = vec![Hostile {
            id: 999,
            pos: player,
            hits: 1,
        }];

        let events = game.update(Duration::from_millis(TICK_MS));
        assert!(events.contains(&GameEvent::PlayerDefeated));
        assert!(game.state().terminal);

        run_for(&mut game, RESET_DELAY_MS - 10);
        assert!(game.state().terminal);
        assert_eq!(game.state().score, 7);

        run_for(&mut game, 10);
        let state = game.state();
        assert!(!state.terminal);
        assert_eq!(state.score, 0);
        assert!(state.player.health > 0);
        assert_eq!(state.base_hits, INITIAL_BASE_HITS);
        assert_eq!(state.hostiles.len(), HOSTILE_COUNT);
    }

    #[test]
    fn test_reset_restarts_respawn_interval() {
        let mut game = immortal(4);
        run_for(&mut game, 18_990);
        game.state.player.health = 1;
        let player = game.state.player.pos;
        game.state.hostiles = vec![Hostile {
            id: 999,
            pos: player,
            hits: 1,
        }];

        // Defeat on the 19.02 s tick, reset 2 s later
        let mut defeated = Vec::new();
        while !defeated.contains(&GameEvent::PlayerDefeated) {
            defeated = game.update(Duration::from_millis(10));
        }
        let defeat_ms = game.clock_ms();
        run_for(&mut game, RESET_DELAY_MS);
        assert!(!game.state().terminal);
        game.state.player.health = u32::MAX;
        let reset_ms = defeat_ms + RESET_DELAY_MS;

        // Retries while terminal must not carry over into the new run
        run_for(&mut game, RESPAWN_INTERVAL_MS - 20);
        assert!(game.clock_ms() < reset_ms + RESPAWN_INTERVAL_MS);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS);

        run_for(&mut game, 20);
        assert!(game.clock_ms() >= reset_ms + RESPAWN_INTERVAL_MS);
        assert_eq!(game.state().base_hits, INITIAL_BASE_HITS + 1);
    }

    #[test]
    fn test_huge_frame_does_not_wrap() {
        let mut game = immortal(1);
        game.update(Duration::MAX);
        assert_eq!(game.clock_ms(), MAX_FRAME_MS);
    }

    #[test]
    fn test_autopilot_releases_keys_it_no_longer_wants() {
        let mut game = immortal(7);
        game.state.hostiles.clear();
        game.state.key_down("Up");
        game.autopilot = true;
        game.update(Duration::from_millis(TICK_MS));
        assert_eq!(game.state().held_keys().count(), 0);
    }

    #[test]
    fn test_input_passes_through() {
        let mut game = immortal(5);
        game.state.hostiles.clear();
        game.key_down("Right");
        game.update(Duration::from_millis(TICK_MS));
        assert_eq!(game.state().player.pos, Vec2::new(155.0, 150.0));
        game.key_up("Right");

        assert!(game.fire(0.0, 0.0));
        assert_eq!(game.shots_fired(), 1);
        assert_eq!(game.snapshot().projectiles.len(), 1);
    }

    #[test]
    fn test_autopilot_shoots() {
        let mut game = immortal(6);
        game.autopilot = true;
        run_for(&mut game, 3_000);
        assert!(game.shots_fired() > 0);

        let pos = game.state().player.pos;
        assert!(pos.x >= 0.0 && pos.x <= ARENA_WIDTH - PLAYER_SIZE);
        assert!(pos.y >= 0.0 && pos.y <= ARENA_HEIGHT - PLAYER_SIZE);
    }
}
