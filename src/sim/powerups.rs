//! Falling power-ups: spawn, fall, paddle pickup

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Double the balls (up to the cap)
    Multi,
    /// Grow the balls one tier; at max tier, double score instead
    Big,
    /// Destroy every brick and finish the level
    Clear,
    /// Faster paddle for the rest of the run
    Speed,
}

impl PowerUpKind {
    /// Assignment order when placing buffs on a fresh grid
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Multi,
        PowerUpKind::Big,
        PowerUpKind::Clear,
        PowerUpKind::Speed,
    ];

    /// Single-letter label drawn on the falling box
    pub fn label(&self) -> char {
        match self {
            PowerUpKind::Multi => 'M',
            PowerUpKind::Big => 'B',
            PowerUpKind::Clear => 'C',
            PowerUpKind::Speed => 'S',
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUp {
    /// Center of the box
    pub pos: Vec2,
    /// Pixels per frame, downward
    pub fall_speed: f32,
    pub kind: PowerUpKind,
    pub active: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2, fall_speed: f32) -> Self {
        Self {
            pos,
            fall_speed,
            kind,
            active: true,
        }
    }

    pub fn rect(&self, size: f32) -> Rect {
        Rect::centered(self.pos, size)
    }
}

/// Advance every power-up by one frame
///
/// Returns the kinds collected by the paddle this frame, in spawn order.
/// Each instance triggers at most once; collected and missed power-ups are
/// purged before returning.
pub fn update(
    powerups: &mut Vec<PowerUp>,
    paddle: &Rect,
    size: f32,
    play_height: f32,
) -> Vec<PowerUpKind> {
    let mut collected = Vec::new();

    for powerup in powerups.iter_mut().filter(|p| p.active) {
        powerup.pos.y += powerup.fall_speed;

        let rect = powerup.rect(size);
        if paddle.touches(&rect) {
            powerup.active = false;
            collected.push(powerup.kind);
        } else if rect.top() > play_height {
            powerup.active = false;
        }
    }

    powerups.retain(|p| p.active);
    collected
}
