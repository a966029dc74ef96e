//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - One `tick` per display frame, per-frame speeds
//! - Seeded RNG only
//! - Stable iteration order (bricks column-major, balls and power-ups by spawn)
//! - Side effects leave as `GameEvent`s for collaborators to handle

pub mod balls;
pub mod collision;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod paddle;
pub mod powerups;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use balls::Ball;
pub use geometry::{Rect, circle_rect_hit, paddle_bounce_velocity};
pub use grid::{Brick, BrickDamage, BrickGrid, CollisionOutcome, resolve_collisions};
pub use input::{CheatCombo, TickInput};
pub use paddle::Paddle;
pub use powerups::{PowerUp, PowerUpKind};
pub use snapshot::{OverlayText, Snapshot};
pub use state::{GameEvent, GameState, Mode, Progress};
pub use tick::tick;
