//! The player's paddle

use serde::Serialize;

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Horizontal paddle on a fixed row near the bottom
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered horizontally
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.play_width - tuning.paddle_width) / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Hit position relative to center: -1 at the left edge, +1 at the right
    pub fn normalized_offset(&self, x: f32) -> f32 {
        (x - self.center_x()) / (self.width / 2.0)
    }

    /// Move by `speed` for this frame's held directions
    ///
    /// Right wins when both are held. The paddle never leaves the play area.
    /// Returns the horizontal delta actually applied.
    pub fn steer(&mut self, left: bool, right: bool, speed: f32, play_width: f32) -> f32 {
        let prev_x = self.x;

        if right && self.x + self.width < play_width {
            self.x += speed;
        } else if left && self.x > 0.0 {
            self.x -= speed;
        }

        let max_x = play_width - self.width;
        self.x = self.x.min(max_x).max(0.0);

        self.x - prev_x
    }
}
