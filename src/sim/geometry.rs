//! Axis-aligned geometry for bricks, paddle and pickups
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::Serialize;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of edge `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive overlap test (touching edges count)
    pub fn touches(&self, other: &Rect) -> bool {
        other.bottom() >= self.top()
            && other.top() <= self.bottom()
            && other.right() >= self.left()
            && other.left() <= self.right()
    }

    /// Closest point inside the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left(), self.right()),
            p.y.clamp(self.top(), self.bottom()),
        )
    }
}

/// Circle-vs-rectangle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHit {
    /// Displacement from the closest rectangle point to the circle center
    pub delta: Vec2,
}

impl CircleHit {
    /// True when the horizontal overlap is the smaller one, i.e. the circle
    /// struck a vertical side and should reverse its x velocity
    pub fn is_side_hit(&self) -> bool {
        self.delta.x.abs() > self.delta.y.abs()
    }
}

/// Closest-point test between a circle and a rectangle
///
/// Strict: a circle exactly tangent to the rectangle is not a hit.
pub fn circle_rect_hit(center: Vec2, radius: f32, rect: &Rect) -> Option<CircleHit> {
    let delta = center - rect.closest_point(center);
    if delta.length_squared() < radius * radius {
        Some(CircleHit { delta })
    } else {
        None
    }
}

/// Velocity leaving the paddle
///
/// `offset` is the hit position relative to the paddle center, normalized so
/// the paddle edges are -1 and +1 (clamped). The return angle from vertical
/// is `offset * max_angle`; magnitude is the incoming speed, or `fallback`
/// when the ball was somehow stationary. Always points upward.
pub fn paddle_bounce_velocity(vel: Vec2, offset: f32, max_angle: f32, fallback: f32) -> Vec2 {
    let speed = vel.length();
    let speed = if speed > 0.0 { speed } else { fallback };
    let angle = offset.clamp(-1.0, 1.0) * max_angle;
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Rotate a velocity by `angle` radians, keeping its magnitude
pub fn rotate_velocity(vel: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(vel)
}
