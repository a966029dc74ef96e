//! The destructible brick grid
//!
//! Bricks are stored column-major (all rows of column 0, then column 1, ...),
//! which is also the fixed collision scan order. Screen positions are derived
//! from (column, row) and the grid's horizontal offset on demand.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::balls::Ball;
use super::geometry::{Rect, circle_rect_hit};
use super::powerups::PowerUpKind;
use super::state::GameEvent;
use crate::rows_for_level;
use crate::tuning::Tuning;

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brick {
    pub col: u32,
    pub row: u32,
    pub present: bool,
    /// Hard layer: the first hit only cracks it off
    pub ice: bool,
    pub buff: Option<PowerUpKind>,
}

/// What a single collision did to a brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrickDamage {
    /// Ice layer removed, brick still standing
    Cracked,
    /// Brick destroyed, releasing its buff if it had one
    Destroyed { buff: Option<PowerUpKind> },
}

/// Result of one frame's brick collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    pub score_delta: u64,
    /// Buff released by a destroyed brick, with the brick's center
    pub released: Option<(PowerUpKind, Vec2)>,
    pub level_cleared: bool,
}

/// The brick grid for one level
#[derive(Debug, Clone, Serialize)]
pub struct BrickGrid {
    pub columns: u32,
    pub rows: u32,
    /// Left edge of column 0
    pub offset_x: f32,
    pub offset_top: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    bricks: Vec<Brick>,
    remaining: u32,
}

impl BrickGrid {
    /// Build a full grid for `level`, recentred, top row iced, buffs placed
    pub fn new(tuning: &Tuning, level: u32, rng: &mut impl Rng) -> Self {
        let columns = tuning.brick_columns;
        let rows = rows_for_level(level, tuning.brick_base_rows, tuning.brick_max_rows);

        let mut bricks = Vec::with_capacity((columns * rows) as usize);
        for col in 0..columns {
            for row in 0..rows {
                bricks.push(Brick {
                    col,
                    row,
                    present: true,
                    ice: row == 0,
                    buff: None,
                });
            }
        }

        let mut grid = Self {
            columns,
            rows,
            offset_x: 0.0,
            offset_top: tuning.brick_offset_top,
            brick_width: tuning.brick_width,
            brick_height: tuning.brick_height,
            padding: tuning.brick_padding,
            remaining: bricks.len() as u32,
            bricks,
        };
        grid.offset_x = (tuning.play_width - grid.width()) / 2.0;
        grid.assign_buffs(rng);

        log::debug!(
            "Level {} grid: {}x{} bricks, offset {}",
            level,
            columns,
            rows,
            grid.offset_x
        );
        grid
    }

    /// Put one of each buff type on distinct, uniformly random bricks
    fn assign_buffs(&mut self, rng: &mut impl Rng) {
        let mut indices: Vec<usize> = (0..self.bricks.len()).collect();
        indices.shuffle(rng);

        for (&index, kind) in indices.iter().zip(PowerUpKind::ALL) {
            let brick = &mut self.bricks[index];
            debug_assert!(brick.buff.is_none(), "brick already carries a buff");
            brick.buff = Some(kind);
        }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Live count of present bricks
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Recount present bricks (should always equal `remaining`)
    pub fn present_count(&self) -> u32 {
        self.bricks.iter().filter(|b| b.present).count() as u32
    }

    pub fn index_of(&self, col: u32, row: u32) -> usize {
        (col * self.rows + row) as usize
    }

    /// Total width of the grid including inner padding
    pub fn width(&self) -> f32 {
        let columns = self.columns as f32;
        columns * self.brick_width + (columns - 1.0).max(0.0) * self.padding
    }

    /// Screen rectangle of a brick under the current offset
    pub fn brick_rect(&self, brick: &Brick) -> Rect {
        Rect::new(
            self.offset_x + brick.col as f32 * (self.brick_width + self.padding),
            self.offset_top + brick.row as f32 * (self.brick_height + self.padding),
            self.brick_width,
            self.brick_height,
        )
    }

    /// Shift the whole grid by the paddle's movement, staying inside the play area
    pub fn follow_paddle(&mut self, dx: f32, play_width: f32) {
        if dx == 0.0 {
            return;
        }
        let max_offset = play_width - self.width();
        self.offset_x = (self.offset_x + dx).max(0.0).min(max_offset);
    }

    /// Apply one qualifying hit to a present brick
    pub fn hit(&mut self, index: usize) -> BrickDamage {
        let brick = &mut self.bricks[index];
        debug_assert!(brick.present, "hit on a destroyed brick");

        if brick.ice {
            brick.ice = false;
            log::debug!("Ice cracked at ({}, {})", brick.col, brick.row);
            return BrickDamage::Cracked;
        }

        BrickDamage::Destroyed {
            buff: self.destroy(index),
        }
    }

    /// Destroy a present brick, consuming and returning its buff
    pub fn destroy(&mut self, index: usize) -> Option<PowerUpKind> {
        let brick = &mut self.bricks[index];
        if !brick.present {
            return None;
        }

        brick.present = false;
        debug_assert!(self.remaining > 0, "remaining brick count underflow");
        self.remaining -= 1;
        brick.buff.take()
    }

    /// Destroy every present brick without releasing buffs
    ///
    /// Returns how many bricks were destroyed.
    pub fn clear_all(&mut self) -> u32 {
        let mut destroyed = 0;
        for index in 0..self.bricks.len() {
            if self.bricks[index].present {
                self.destroy(index);
                destroyed += 1;
            }
        }
        debug_assert_eq!(self.remaining, 0);
        destroyed
    }

    /// Wipe the grid clean, ice included (skip-level cheat)
    pub fn force_clear(&mut self) {
        self.clear_all();
        for brick in &mut self.bricks {
            brick.ice = false;
        }
    }
}

/// Resolve at most one brick collision for this frame
///
/// Scans bricks column-major, and for each present brick checks balls in
/// order. The first overlap found is resolved and the scan stops: the ball
/// reflects on the axis with the smaller overlap, then the brick either
/// loses its ice or is destroyed for `points` points.
pub fn resolve_collisions(
    grid: &mut BrickGrid,
    balls: &mut [Ball],
    points: u64,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    let mut found = None;

    'scan: for (index, brick) in grid.bricks.iter().enumerate() {
        if !brick.present {
            continue;
        }
        let rect = grid.brick_rect(brick);
        for (ball_index, ball) in balls.iter().enumerate() {
            if let Some(hit) = circle_rect_hit(ball.pos, ball.radius, &rect) {
                found = Some((index, ball_index, hit, rect.center()));
                break 'scan;
            }
        }
    }

    let Some((index, ball_index, hit, center)) = found else {
        return CollisionOutcome::default();
    };

    let ball = &mut balls[ball_index];
    if hit.is_side_hit() {
        ball.vel.x = -ball.vel.x;
    } else {
        ball.vel.y = -ball.vel.y;
    }
    events.push(GameEvent::BrickHit);

    match grid.hit(index) {
        BrickDamage::Cracked => CollisionOutcome::default(),
        BrickDamage::Destroyed { buff } => CollisionOutcome {
            score_delta: points,
            released: buff.map(|kind| (kind, center)),
            level_cleared: grid.remaining() == 0,
        },
    }
}
