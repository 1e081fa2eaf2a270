use rand::seq::SliceRandom;

/// How many one-second ticks a banner stays on screen.
const BANNER_TICKS: u32 = 3;

const FLOURISHES: [&str; 5] = [
    "LEVEL UP!",
    "NEW LEVEL!",
    "ONWARDS!",
    "WELL EARNED!",
    "KEEP GOING!",
];

/// Transient banner shown after a level-up, counted down by the app tick.
/// Replaces a blocking notification; rendering is up to the host.
#[derive(Debug, Clone)]
pub struct LevelCelebration {
    pub message: String,
    pub ticks_remaining: u32,
    pub is_active: bool,
}

impl LevelCelebration {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            ticks_remaining: 0,
            is_active: false,
        }
    }

    /// Start (or restart) the banner for a freshly reached level. When one
    /// result crosses several thresholds the last call wins, which shows
    /// the highest level reached.
    pub fn start(&mut self, level: u32) {
        let mut rng = rand::thread_rng();
        let flourish = FLOURISHES.choose(&mut rng).unwrap_or(&FLOURISHES[0]);

        self.message = format!("{flourish} You reached level {level}");
        self.ticks_remaining = BANNER_TICKS;
        self.is_active = true;
    }

    /// Advance one tick; the banner expires after a few seconds.
    pub fn on_tick(&mut self) {
        if !self.is_active {
            return;
        }
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        if self.ticks_remaining == 0 {
            self.is_active = false;
        }
    }
}

impl Default for LevelCelebration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_by_default() {
        let celebration = LevelCelebration::new();

        assert!(!celebration.is_active);
        assert!(celebration.message.is_empty());
    }

    #[test]
    fn test_start_activates_with_level_in_message() {
        let mut celebration = LevelCelebration::new();

        celebration.start(3);

        assert!(celebration.is_active);
        assert!(celebration.message.contains("level 3"));
        assert_eq!(celebration.ticks_remaining, BANNER_TICKS);
    }

    #[test]
    fn test_banner_expires_after_its_ticks() {
        let mut celebration = LevelCelebration::new();
        celebration.start(2);

        for _ in 0..BANNER_TICKS {
            celebration.on_tick();
        }

        assert!(!celebration.is_active);
    }

    #[test]
    fn test_tick_on_inactive_banner_is_noop() {
        let mut celebration = LevelCelebration::new();

        celebration.on_tick();

        assert!(!celebration.is_active);
        assert_eq!(celebration.ticks_remaining, 0);
    }

    #[test]
    fn test_restart_resets_countdown() {
        let mut celebration = LevelCelebration::new();

        celebration.start(2);
        celebration.on_tick();
        celebration.start(3);

        assert_eq!(celebration.ticks_remaining, BANNER_TICKS);
        assert!(celebration.message.contains("level 3"));
    }
}
