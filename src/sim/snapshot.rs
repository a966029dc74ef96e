//! Read-only view of the game for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::geometry::Rect;
use super::powerups::PowerUpKind;
use super::state::{GameState, Mode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    pub present: bool,
    pub ice: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpView {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub label: char,
}

/// Text shown over the play area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayText {
    pub headline: String,
    pub prompt: String,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub balls: Vec<BallView>,
    pub paddle: Rect,
    pub bricks: Vec<BrickView>,
    pub powerups: Vec<PowerUpView>,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    /// Present while Idle or in an overlay
    pub overlay: Option<OverlayText>,
}

/// Headline and prompt for the current mode
pub fn overlay_text(mode: Mode, max_level: u32) -> Option<OverlayText> {
    let (headline, prompt) = match mode {
        Mode::Running => return None,
        Mode::Idle => (
            "Move with \u{2190} \u{2192}".to_string(),
            "Press SPACE to launch".to_string(),
        ),
        Mode::GameOver => ("GAME OVER".to_string(), "Press SPACE to restart".to_string()),
        Mode::Win => (
            format!("YOU HAVE WON LEVEL {}!", max_level),
            "Press SPACE to play again".to_string(),
        ),
        Mode::LevelComplete { level } => (
            format!("LEVEL {} COMPLETE", level),
            "Press SPACE for the next level".to_string(),
        ),
    };
    Some(OverlayText { headline, prompt })
}

impl GameState {
    /// Capture a render-facing view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        let size = self.tuning.powerup_size;

        Snapshot {
            mode: self.mode,
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            paddle: self.paddle.rect(),
            bricks: self
                .grid
                .bricks()
                .iter()
                .map(|b| BrickView {
                    rect: self.grid.brick_rect(b),
                    present: b.present,
                    ice: b.ice,
                })
                .collect(),
            powerups: self
                .powerups
                .iter()
                .filter(|p| p.active)
                .map(|p| PowerUpView {
                    rect: p.rect(size),
                    kind: p.kind,
                    label: p.kind.label(),
                })
                .collect(),
            score: self.progress.score,
            high_score: self.progress.high_score,
            level: self.progress.level,
            overlay: overlay_text(self.mode, self.tuning.max_level),
        }
    }
}
