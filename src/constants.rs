//! Game constants: point costs, combo steps, life budget and storage keys.
//!
//! - [`ANSWER_COST`] is both the base value added to a fresh round and the
//!   penalty for a wrong guess.
//! - [`STREAK_BONUS_PER_STEP`] × streak × [`combo_multiplier_for`] = streak bonus.

/// Base value of the hidden answer; also the wrong-guess penalty.
pub const ANSWER_COST: i64 = 100;

/// Default number of hearts.
pub const DEFAULT_MAX_LIFE: u32 = 3;

/// Points per streak step before the combo multiplier is applied.
pub const STREAK_BONUS_PER_STEP: i64 = 50;

/// Streak thresholds at which the combo multiplier steps up.
pub const COMBO_TIER_1: u32 = 3;
pub const COMBO_TIER_2: u32 = 6;
pub const COMBO_TIER_3: u32 = 10;

/// Multipliers for streaks below tier 1, tier 1, tier 2 and tier 3+.
pub const COMBO_MULTIPLIERS: [f64; 4] = [1.0, 1.5, 2.0, 3.0];

/// Prefix shared by every persisted stats key.
pub const STATS_KEY_PREFIX: &str = "guesser_";

pub const STATS_KEY_STREAK: &str = "guesser_streak";
pub const STATS_KEY_TOTAL_CORRECT: &str = "guesser_total_correct";
pub const STATS_KEY_BEST_SCORE: &str = "guesser_best_score";

/// Glyph used by the underscore-mask hint for every non-underscore character.
pub const MASK_GLYPH: char = '○';

/// Shown by the second-character hint when the name has a single character.
pub const NO_SECOND_CHAR: &str = "(none)";

/// Default location of the persisted stats file, relative to the base path.
pub const DEFAULT_STATS_PATH: &str = "data/stats.json";

/// Step function from streak length to combo multiplier.
#[inline]
pub fn combo_multiplier_for(streak: u32) -> f64 {
    if streak >= COMBO_TIER_3 {
        COMBO_MULTIPLIERS[3]
    } else if streak >= COMBO_TIER_2 {
        COMBO_MULTIPLIERS[2]
    } else if streak >= COMBO_TIER_1 {
        COMBO_MULTIPLIERS[1]
    } else {
        COMBO_MULTIPLIERS[0]
    }
}

/// floor(streak * 50 * multiplier), truncated toward zero.
#[inline]
pub fn streak_bonus_for(streak: u32) -> i64 {
    let base = streak as i64 * STREAK_BONUS_PER_STEP;
    (base as f64 * combo_multiplier_for(streak)) as i64
}
