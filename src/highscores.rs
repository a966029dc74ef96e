//! Persisted high score
//!
//! Best effort: a missing or corrupt file reads as zero, and a failed save is
//! reported to the caller, who logs it and keeps playing.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The best score seen across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u64,
}

impl HighScore {
    pub fn new(score: u64) -> Self {
        Self { score }
    }

    /// Keep `score` if it beats the stored one; returns true when it did
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.score {
            self.score = score;
            return true;
        }
        false
    }

    /// Load from a JSON file, or zero when unavailable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(json) = std::fs::read_to_string(path) else {
            log::info!("No high score at {}, starting fresh", path.display());
            return Self::default();
        };

        match serde_json::from_str::<HighScore>(&json) {
            Ok(high) => {
                log::info!("Loaded high score {}", high.score);
                high
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("High score {} saved", self.score);
        Ok(())
    }
}
