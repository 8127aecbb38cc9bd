//! Input events: held direction keys and firing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Projectile};
use crate::consts::PROJECTILE_SPEED;
use crate::direction_between;

/// Movement directions (four-way)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Canonical key identifier for this direction
    pub fn key_name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    /// Map a keyboard identifier to a direction (arrows and WASD)
    pub fn from_key(code: &str) -> Option<Self> {
        match code {
            "Up" | "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "Down" | "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "Left" | "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "Right" | "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step for this direction (screen coordinates, y down)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

impl GameState {
    /// Key pressed. Ignored when terminal or not a direction key.
    pub fn key_down(&mut self, code: &str) {
        if self.terminal {
            return;
        }
        if let Some(dir) = Direction::from_key(code) {
            self.held.insert(dir);
        }
    }

    /// Key released. Ignored when terminal or not a direction key.
    pub fn key_up(&mut self, code: &str) {
        if self.terminal {
            return;
        }
        if let Some(dir) = Direction::from_key(code) {
            self.held.remove(&dir);
        }
    }

    /// Fire from the player's center toward a point.
    ///
    /// Returns `false` (and spawns nothing) when terminal or when the target
    /// is exactly the player's center.
    pub fn fire(&mut self, target_x: f32, target_y: f32) -> bool {
        if self.terminal {
            return false;
        }
        let origin = self.player.center();
        let Some(dir) = direction_between(origin, Vec2::new(target_x, target_y)) else {
            return false;
        };
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            vel: dir * PROJECTILE_SPEED,
        });
        true
    }
}
