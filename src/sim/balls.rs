//! Ball bodies: motion, wall/paddle bounces, loss and multi-ball splitting

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collision::{ball_lost, ball_paddle_contact, ball_wall_contact, reflect_off_walls};
use super::geometry::{paddle_bounce_velocity, rotate_velocity};
use super::paddle::Paddle;
use super::state::GameEvent;
use crate::consts::{BOUNCE_FALLBACK_SPEED, SPLIT_FALLBACK_SPEED};
use crate::tuning::Tuning;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shared by all balls, set from the current size tier
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Place the ball resting on top of the paddle center
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - self.radius - 1.0);
    }
}

/// Fresh ball resting on the paddle, aimed up and randomly left or right
pub fn serve_ball(paddle: &Paddle, radius: f32, speed: f32, rng: &mut impl Rng) -> Ball {
    let dx = if rng.random_bool(0.5) { speed } else { -speed };
    let mut ball = Ball::new(Vec2::ZERO, Vec2::new(dx, -speed), radius);
    ball.rest_on(paddle);
    ball
}

/// Advance every ball by one frame
///
/// Moves, bounces off walls and the paddle, and drops balls that fell out
/// through the bottom. Emits `WallHit` per reflected axis and `PaddleHit` per paddle bounce.
pub fn integrate(balls: &mut Vec<Ball>, paddle: &Paddle, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let paddle_rect = paddle.rect();

    for ball in balls.iter_mut() {
        ball.pos += ball.vel;

        let contact = ball_wall_contact(ball.pos, ball.radius, tuning.play_width);
        if contact.any() {
            let (vel, bounce) = reflect_off_walls(ball.vel, contact);
            ball.vel = vel;
            for _ in 0..bounce.hits() {
                events.push(GameEvent::WallHit);
            }
        }

        if ball_paddle_contact(ball.pos, ball.vel, ball.radius, &paddle_rect) {
            ball.pos.y = paddle.y - ball.radius - 1.0;
            let offset = paddle.normalized_offset(ball.pos.x);
            ball.vel = paddle_bounce_velocity(
                ball.vel,
                offset,
                tuning.max_bounce_angle,
                BOUNCE_FALLBACK_SPEED,
            );
            events.push(GameEvent::PaddleHit);
        }
    }

    balls.retain(|b| !ball_lost(b.pos, b.radius, tuning.play_height));
}

/// Double the ball count, up to `max_balls`
///
/// Clones of the most recently added ball, each turned by a uniform random
/// jitter in `[-jitter, jitter]` so they fan out. Returns how many were added.
pub fn split(balls: &mut Vec<Ball>, max_balls: usize, jitter: f32, rng: &mut impl Rng) -> usize {
    let count = balls.len();
    if count == 0 {
        return 0;
    }

    let target = max_balls.min(count * 2);
    let mut added = 0;

    while balls.len() < target {
        let Some(base) = balls.last().cloned() else {
            break;
        };

        let vel = if base.speed() > 0.0 {
            base.vel
        } else {
            Vec2::new(SPLIT_FALLBACK_SPEED, 0.0)
        };
        let angle = rng.random_range(-jitter..=jitter);

        balls.push(Ball::new(base.pos, rotate_velocity(vel, angle), base.radius));
        added += 1;
    }

    debug_assert!(balls.len() <= max_balls.max(count));
    added
}

/// Apply a new shared radius to every ball
pub fn resize(balls: &mut [Ball], radius: f32) {
    for ball in balls {
        ball.radius = radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Tuning, Paddle) {
        let tuning = Tuning::default();
        let paddle = Paddle::new(&tuning);
        (tuning, paddle)
    }

    #[test]
    fn test_serve_ball_rests_on_paddle() {
        let (_, paddle) = setup();
        let mut rng = Pcg32::seed_from_u64(7);
        let ball = serve_ball(&paddle, 8.0, 3.0, &mut rng);
        assert_eq!(ball.pos, Vec2::new(paddle.center_x(), paddle.y - 9.0));
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.vel.x.abs(), 3.0);
    }

    #[test]
    fn test_integrate_moves_ball() {
        let (tuning, paddle) = setup();
        let mut balls = vec![Ball::new(Vec2::new(100.0, 100.0), Vec2::new(3.0, -3.0), 8.0)];
        let mut events = Vec::new();
        integrate(&mut balls, &paddle, &tuning, &mut events);
        assert_eq!(balls[0].pos, Vec2::new(103.0, 97.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_wall_bounce_keeps_speed() {
        let (tuning, paddle) = setup();
        let mut balls = vec![
            Ball::new(Vec2::new(470.0, 100.0), Vec2::new(3.0, 2.0), 8.0),
            Ball::new(Vec2::new(100.0, 9.0), Vec2::new(1.0, -3.0), 8.0),
        ];
        let speeds: Vec<f32> = balls.iter().map(Ball::speed).collect();
        let mut events = Vec::new();

        integrate(&mut balls, &paddle, &tuning, &mut events);

        assert_eq!(balls[0].vel, Vec2::new(-3.0, 2.0));
        assert_eq!(balls[1].vel, Vec2::new(1.0, 3.0));
        for (ball, speed) in balls.iter().zip(speeds) {
            assert!((ball.speed() - speed).abs() < 1e-5);
        }
        assert_eq!(events, vec![GameEvent::WallHit, GameEvent::WallHit]);
    }

    #[test]
    fn test_corner_bounce_hits_both_walls() {
        let (tuning, paddle) = setup();
        let mut balls = vec![Ball::new(Vec2::new(9.0, 9.0), Vec2::new(-3.0, -3.0), 8.0)];
        let mut events = Vec::new();

        integrate(&mut balls, &paddle, &tuning, &mut events);

        assert_eq!(balls[0].vel, Vec2::new(3.0, 3.0));
        assert_eq!(events, vec![GameEvent::WallHit, GameEvent::WallHit]);
    }

    #[test]
    fn test_paddle_bounce_repositions_and_points_up() {
        let (tuning, paddle) = setup();
        let start = Vec2::new(paddle.center_x() + 20.0, paddle.y - 10.0);
        let mut balls = vec![Ball::new(start, Vec2::new(0.0, 4.0), 8.0)];
        let mut events = Vec::new();

        integrate(&mut balls, &paddle, &tuning, &mut events);

        let ball = &balls[0];
        assert_eq!(ball.pos.y, paddle.y - 9.0);
        assert!(ball.vel.y < 0.0);
        assert!(ball.vel.x > 0.0, "right of center deflects right");
        assert!((ball.speed() - 4.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::PaddleHit]);
    }

    #[test]
    fn test_rising_ball_passes_paddle_row() {
        let (tuning, paddle) = setup();
        let start = Vec2::new(paddle.center_x(), paddle.y - 2.0);
        let mut balls = vec![Ball::new(start, Vec2::new(0.0, -3.0), 8.0)];
        let mut events = Vec::new();
        integrate(&mut balls, &paddle, &tuning, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_fallen_balls_are_dropped() {
        let (tuning, paddle) = setup();
        let mut balls = vec![
            Ball::new(Vec2::new(10.0, 326.0), Vec2::new(0.0, 3.0), 8.0),
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(0.0, 3.0), 8.0),
            Ball::new(Vec2::new(20.0, 327.0), Vec2::new(0.0, 3.0), 8.0),
        ];
        let mut events = Vec::new();
        integrate(&mut balls, &paddle, &tuning, &mut events);
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].pos, Vec2::new(100.0, 103.0));
    }

    #[test]
    fn test_split_doubles_up_to_cap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut balls = vec![Ball::new(Vec2::new(50.0, 50.0), Vec2::new(3.0, -4.0), 8.0)];

        assert_eq!(split(&mut balls, 4, 0.2, &mut rng), 1);
        assert_eq!(balls.len(), 2);
        assert_eq!(split(&mut balls, 4, 0.2, &mut rng), 2);
        assert_eq!(balls.len(), 4);
        assert_eq!(split(&mut balls, 4, 0.2, &mut rng), 0);
        assert_eq!(balls.len(), 4);

        for ball in &balls {
            assert!((ball.speed() - 5.0).abs() < 1e-4);
            assert_eq!(ball.pos, Vec2::new(50.0, 50.0));
        }
    }

    #[test]
    fn test_split_three_stops_at_cap() {
        let mut rng = Pcg32::seed_from_u64(2);
        let ball = Ball::new(Vec2::new(50.0, 50.0), Vec2::new(3.0, -4.0), 8.0);
        let mut balls = vec![ball.clone(), ball.clone(), ball];
        assert_eq!(split(&mut balls, 4, 0.2, &mut rng), 1);
        assert_eq!(balls.len(), 4);
    }

    #[test]
    fn test_split_jitter_is_bounded() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let mut balls = vec![Ball::new(Vec2::ZERO, Vec2::new(0.0, -5.0), 8.0)];
            split(&mut balls, 4, 0.2, &mut rng);
            let base = balls[0].vel.y.atan2(balls[0].vel.x);
            let clone = balls[1].vel.y.atan2(balls[1].vel.x);
            assert!((clone - base).abs() <= 0.2 + 1e-5);
        }
    }

    #[test]
    fn test_split_with_no_balls_is_noop() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut balls = Vec::new();
        assert_eq!(split(&mut balls, 4, 0.2, &mut rng), 0);
        assert!(balls.is_empty());
    }
}
