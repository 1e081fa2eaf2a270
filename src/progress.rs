use crate::stats::SessionResult;
use crate::util::clamped_ratio;

/// XP needed to leave level 1.
pub const BASE_XP_THRESHOLD: u32 = 100;

/// Threshold multiplier applied after each level-up, rounded immediately.
pub const THRESHOLD_GROWTH: f64 = 1.5;

/// Emitted once per threshold crossing; the host decides how to present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
}

/// Gamification state carried across sessions for the lifetime of the
/// process. Holds the invariant `xp < xp_threshold` after every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProgress {
    pub level: u32,
    pub xp: u32,
    pub xp_threshold: u32,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_threshold: BASE_XP_THRESHOLD,
        }
    }
}

/// XP awarded for one finished test: wpm scaled by accuracy, halved.
pub fn xp_gained(result: &SessionResult) -> u32 {
    ((f64::from(result.wpm) * (f64::from(result.accuracy) / 100.0)) / 2.0).round() as u32
}

impl PlayerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll a finished result into xp, consuming threshold crossings as
    /// level-ups. The threshold grows by 1.5x (rounded) after each crossing,
    /// before the next comparison.
    pub fn apply(&mut self, result: &SessionResult) -> Vec<LevelUp> {
        self.xp += xp_gained(result);

        let mut level_ups = Vec::new();
        while self.xp >= self.xp_threshold {
            self.level += 1;
            self.xp -= self.xp_threshold;
            self.xp_threshold = (f64::from(self.xp_threshold) * THRESHOLD_GROWTH).round() as u32;
            level_ups.push(LevelUp { level: self.level });
        }
        level_ups
    }

    /// Fill proportion of the xp bar, in [0, 1].
    pub fn xp_ratio(&self) -> f64 {
        clamped_ratio(self.xp, self.xp_threshold)
    }
}
