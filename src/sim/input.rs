//! Logical input signals consumed once per frame

/// Input for a single frame
///
/// Directions are held state; `confirm` and `cheat` are edge pulses that the
/// caller clears after the frame consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Launch from Idle, or dismiss an overlay
    pub confirm: bool,
    /// Skip-level cheat pulse
    pub cheat: bool,
    /// Caller's clock in milliseconds, used to time cheat pulses
    pub now_ms: u64,
}

/// Rolling detector for the skip-level cheat
#[derive(Debug, Clone, Default)]
pub struct CheatCombo {
    count: u32,
    last_ms: Option<u64>,
}

impl CheatCombo {
    /// Register a pulse; true when `needed` pulses arrived, each within
    /// `window_ms` of the previous one
    pub fn pulse(&mut self, now_ms: u64, needed: u32, window_ms: u64) -> bool {
        let in_window = self
            .last_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= window_ms);
        if !in_window {
            self.count = 0;
        }

        self.count += 1;
        self.last_ms = Some(now_ms);

        if self.count >= needed {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_quick_pulses_fire() {
        let mut combo = CheatCombo::default();
        assert!(!combo.pulse(1000, 3, 700));
        assert!(!combo.pulse(1500, 3, 700));
        assert!(combo.pulse(2100, 3, 700));
        // Counter restarts after firing
        assert!(!combo.pulse(2200, 3, 700));
    }

    #[test]
    fn test_slow_pulse_restarts_count() {
        let mut combo = CheatCombo::default();
        assert!(!combo.pulse(0, 3, 700));
        assert!(!combo.pulse(500, 3, 700));
        assert!(!combo.pulse(1300, 3, 700));
        assert!(!combo.pulse(1400, 3, 700));
        assert!(combo.pulse(1500, 3, 700));
    }
}
