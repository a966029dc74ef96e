//! Ball-vs-arena collision checks
//!
//! Walls, paddle and the open bottom edge. Brick contacts live in `grid`,
//! since they depend on the grid's scan order.

use glam::Vec2;

use super::geometry::Rect;

/// Which play-area walls a ball is currently violating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Check a ball against the left, right and top walls
pub fn ball_wall_contact(pos: Vec2, radius: f32, play_width: f32) -> WallContact {
    WallContact {
        left: pos.x - radius < 0.0,
        right: pos.x + radius > play_width,
        top: pos.y - radius < 0.0,
    }
}

/// Which velocity axes a wall reflection reversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub horizontal: bool,
    pub vertical: bool,
}

impl WallBounce {
    /// One wall hit per reversed axis
    pub fn hits(&self) -> usize {
        self.horizontal as usize + self.vertical as usize
    }
}

/// Reflect a velocity off the walls in `contact`
///
/// Only reverses a component that still points into the wall, so a ball
/// that is already heading back (e.g. it just grew while touching a wall)
/// is not flipped again. A ball overlapping a wall for several frames
/// therefore bounces, and reports a hit, once per contact.
pub fn reflect_off_walls(vel: Vec2, contact: WallContact) -> (Vec2, WallBounce) {
    let mut out = vel;
    let mut bounce = WallBounce::default();
    if (contact.left && out.x < 0.0) || (contact.right && out.x > 0.0) {
        out.x = -out.x;
        bounce.horizontal = true;
    }
    if contact.top && out.y < 0.0 {
        out.y = -out.y;
        bounce.vertical = true;
    }
    (out, bounce)
}

/// Whether a descending ball's leading edge has reached the paddle
///
/// Matches on the paddle's top edge and horizontal span only; a ball that
/// slipped past the top edge is still caught while it is above the floor.
pub fn ball_paddle_contact(pos: Vec2, vel: Vec2, radius: f32, paddle: &Rect) -> bool {
    vel.y > 0.0 && pos.y + radius >= paddle.top() && pos.x >= paddle.left() && pos.x <= paddle.right()
}

/// Check if a ball fell out through the bottom
pub fn ball_lost(pos: Vec2, radius: f32, play_height: f32) -> bool {
    pos.y - radius > play_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_contact() {
        assert!(!ball_wall_contact(Vec2::new(240.0, 160.0), 8.0, 480.0).any());

        let c = ball_wall_contact(Vec2::new(5.0, 160.0), 8.0, 480.0);
        assert!(c.left && !c.right && !c.top);

        let c = ball_wall_contact(Vec2::new(475.0, 4.0), 8.0, 480.0);
        assert!(c.right && c.top);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let vel = Vec2::new(-3.0, -4.0);
        let contact = WallContact { left: true, right: false, top: true };
        let (out, bounce) = reflect_off_walls(vel, contact);
        assert_eq!(bounce.hits(), 2);
        assert_eq!(out, Vec2::new(3.0, 4.0));
        assert!((out.length() - vel.length()).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_ignores_ball_already_leaving() {
        let contact = WallContact { left: false, right: true, top: false };
        let (out, bounce) = reflect_off_walls(Vec2::new(-3.0, 2.0), contact);
        assert_eq!(bounce, WallBounce::default());
        assert_eq!(out, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_paddle_contact_requires_descent() {
        let paddle = Rect::new(200.0, 305.0, 75.0, 10.0);
        let pos = Vec2::new(230.0, 298.0);
        assert!(ball_paddle_contact(pos, Vec2::new(1.0, 3.0), 8.0, &paddle));
        assert!(!ball_paddle_contact(pos, Vec2::new(1.0, -3.0), 8.0, &paddle));
        assert!(!ball_paddle_contact(Vec2::new(190.0, 298.0), Vec2::new(1.0, 3.0), 8.0, &paddle));
    }

    #[test]
    fn test_ball_lost() {
        assert!(!ball_lost(Vec2::new(100.0, 320.0), 8.0, 320.0));
        assert!(ball_lost(Vec2::new(100.0, 328.5), 8.0, 320.0));
    }
}
