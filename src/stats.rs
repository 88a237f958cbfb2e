//! Persisted player statistics: streak, lifetime correct answers, best score.
//!
//! Loaded once from a [`StatsStore`]; every mutator updates memory first and
//! then writes the new value through. A failed write is returned to the
//! caller but the in-memory state keeps the new value.

use crate::constants::*;
use crate::storage::{StatsStore, StoreError};

pub struct PlayerStats<S: StatsStore> {
    store: S,
    streak: u32,
    total_correct: u32,
    best_score: i64,
}

impl<S: StatsStore> PlayerStats<S> {
    /// Read all three values. Missing, unreadable, non-numeric or negative
    /// entries count as zero.
    pub fn load(store: S) -> Self {
        let mut stats = Self {
            store,
            streak: 0,
            total_correct: 0,
            best_score: 0,
        };
        stats.reload();
        tracing::debug!(
            streak = stats.streak,
            total_correct = stats.total_correct,
            best_score = stats.best_score,
            "Loaded player stats"
        );
        stats
    }

    /// Re-read all values from the store, discarding in-memory state.
    pub fn reload(&mut self) {
        self.streak = read_counter(&self.store, STATS_KEY_STREAK) as u32;
        self.total_correct = read_counter(&self.store, STATS_KEY_TOTAL_CORRECT) as u32;
        self.best_score = read_counter(&self.store, STATS_KEY_BEST_SCORE) as i64;
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn increase_streak(&mut self) -> Result<(), StoreError> {
        self.streak = self.streak.saturating_add(1);
        self.persist(STATS_KEY_STREAK, self.streak as i64)
    }

    pub fn reset_streak(&mut self) -> Result<(), StoreError> {
        self.streak = 0;
        self.persist(STATS_KEY_STREAK, 0)
    }

    pub fn increase_total_correct(&mut self) -> Result<(), StoreError> {
        self.total_correct = self.total_correct.saturating_add(1);
        self.persist(STATS_KEY_TOTAL_CORRECT, self.total_correct as i64)
    }

    /// Store `score` only when it beats the current best. Returns whether it did.
    pub fn record_score_if_best(&mut self, score: i64) -> Result<bool, StoreError> {
        if score <= self.best_score {
            return Ok(false);
        }
        self.best_score = score;
        self.persist(STATS_KEY_BEST_SCORE, score)?;
        Ok(true)
    }

    pub fn combo_multiplier(&self) -> f64 {
        combo_multiplier_for(self.streak)
    }

    pub fn streak_bonus(&self) -> i64 {
        streak_bonus_for(self.streak)
    }

    fn persist(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.store.save(key, &value.to_string())
    }
}

fn read_counter<S: StatsStore>(store: &S, key: &str) -> u64 {
    match store.load(key) {
        Ok(Some(raw)) => parse_counter(&raw),
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stat, using 0");
            0
        }
    }
}

/// Parse a stored counter; anything that is not a non-negative integer is 0.
/// Values beyond `u32::MAX` saturate.
pub fn parse_counter(raw: &str) -> u64 {
    raw.trim()
        .parse::<u64>()
        .map(|v| v.min(u32::MAX as u64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Store whose writes always fail; reads succeed from a fixed map.
    struct ReadOnlyStore(MemoryStore);

    impl StatsStore for ReadOnlyStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.load(key)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".into()))
        }
    }

    /// Store that cannot be read at all.
    struct BrokenStore;

    impl StatsStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    #[test]
    fn test_load_defaults() {
        let stats = PlayerStats::load(MemoryStore::new());
        assert_eq!(stats.streak(), 0);
        assert_eq!(stats.total_correct(), 0);
        assert_eq!(stats.best_score(), 0);
    }

    #[test]
    fn test_load_existing_and_invalid() {
        let store = MemoryStore::with_values([
            (STATS_KEY_STREAK, "4"),
            (STATS_KEY_TOTAL_CORRECT, "null"),
            (STATS_KEY_BEST_SCORE, "-20"),
        ]);
        let stats = PlayerStats::load(store);
        assert_eq!(stats.streak(), 4);
        assert_eq!(stats.total_correct(), 0);
        assert_eq!(stats.best_score(), 0);
        assert_eq!(stats.streak_bonus(), 300);
    }

    #[test]
    fn test_mutators_write_through() {
        let mut stats = PlayerStats::load(MemoryStore::new());
        stats.increase_streak().unwrap();
        stats.increase_streak().unwrap();
        stats.increase_total_correct().unwrap();
        assert_eq!(stats.store().get(STATS_KEY_STREAK), Some("2"));
        assert_eq!(stats.store().get(STATS_KEY_TOTAL_CORRECT), Some("1"));

        stats.reset_streak().unwrap();
        assert_eq!(stats.streak(), 0);
        assert_eq!(stats.store().get(STATS_KEY_STREAK), Some("0"));
    }

    #[test]
    fn test_best_score_only_when_higher() {
        let mut stats = PlayerStats::load(MemoryStore::new());
        assert!(stats.record_score_if_best(500).unwrap());
        assert_eq!(stats.store().get(STATS_KEY_BEST_SCORE), Some("500"));
        assert!(!stats.record_score_if_best(500).unwrap());
        assert!(!stats.record_score_if_best(-10).unwrap());
        assert_eq!(stats.best_score(), 500);
        assert!(stats.record_score_if_best(501).unwrap());
        assert_eq!(stats.store().get(STATS_KEY_BEST_SCORE), Some("501"));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = ReadOnlyStore(MemoryStore::with_values([(STATS_KEY_STREAK, "2")]));
        let mut stats = PlayerStats::load(store);
        assert!(stats.increase_streak().is_err());
        assert_eq!(stats.streak(), 3);
        assert!(stats.record_score_if_best(900).is_err());
        assert_eq!(stats.best_score(), 900);
    }

    #[test]
    fn test_reload_picks_up_store() {
        let mut stats = PlayerStats::load(MemoryStore::new());
        stats.increase_streak().unwrap();
        stats.record_score_if_best(700).unwrap();
        stats.reload();
        assert_eq!(stats.streak(), 1);
        assert_eq!(stats.best_score(), 700);
        assert_eq!(stats.total_correct(), 0);
    }

    #[test]
    fn test_read_failure_defaults_to_zero() {
        let stats = PlayerStats::load(BrokenStore);
        assert_eq!(stats.streak(), 0);
        assert_eq!(stats.best_score(), 0);
    }

    #[test]
    fn test_combo_follows_streak() {
        let mut stats = PlayerStats::load(MemoryStore::new());
        for _ in 0..6 {
            stats.increase_streak().unwrap();
        }
        assert_eq!(stats.combo_multiplier(), 2.0);
        assert_eq!(stats.streak_bonus(), 600);
    }

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("12"), 12);
        assert_eq!(parse_counter(" 3 "), 3);
        assert_eq!(parse_counter(""), 0);
        assert_eq!(parse_counter("abc"), 0);
        assert_eq!(parse_counter("-1"), 0);
        assert_eq!(parse_counter("1.5"), 0);
        assert_eq!(parse_counter("99999999999"), u32::MAX as u64);
    }
}
