//! Hearts: a bounded attempt budget.

use serde::Serialize;

use crate::constants::DEFAULT_MAX_LIFE;

/// `0 <= current <= max`. Alive and game-over are complements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LifeTracker {
    current: u32,
    max: u32,
}

impl Default for LifeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LIFE)
    }
}

impl LifeTracker {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Lose one heart, floored at zero.
    pub fn decrease(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Regain hearts, capped at `max`.
    pub fn recover(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Refill to `max`.
    pub fn reset(&mut self) {
        self.current = self.max;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.is_alive()
    }
}
