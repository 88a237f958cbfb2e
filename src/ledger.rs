//! Round point accounting.

use crate::types::Hint;

/// Mutable point total for one round. Never clamped: a negative total tells
/// the player they bought too many hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLedger {
    points: i64,
    base_cost: i64,
}

impl ScoreLedger {
    /// points = Σ hint.cost + base_cost + streak_bonus
    pub fn new(hints: &[Hint], base_cost: i64, streak_bonus: i64) -> Self {
        let hint_total: i64 = hints.iter().map(|h| h.cost).sum();
        Self {
            points: hint_total + base_cost + streak_bonus,
            base_cost,
        }
    }

    #[inline]
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Debit a revealed hint. Does not guard against revealing the same hint
    /// twice; the session's caller owns that precondition.
    pub fn spend_hint(&mut self, hint: &Hint) {
        self.points -= hint.cost;
    }

    pub fn penalize_wrong_guess(&mut self) {
        self.points -= self.base_cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ANSWER_COST;
    use crate::types::{HintKind, HintValue};

    fn hints() -> Vec<Hint> {
        HintKind::ALL
            .iter()
            .map(|&k| Hint::new(k, HintValue::Int(0)))
            .collect()
    }

    #[test]
    fn test_initial_points() {
        let ledger = ScoreLedger::new(&hints(), ANSWER_COST, 0);
        assert_eq!(ledger.points(), 5100 + 100);
        let ledger = ScoreLedger::new(&hints(), ANSWER_COST, 300);
        assert_eq!(ledger.points(), 5100 + 100 + 300);
        let ledger = ScoreLedger::new(&[], ANSWER_COST, 0);
        assert_eq!(ledger.points(), 100);
    }

    #[test]
    fn test_spend_and_penalize() {
        let hs = hints();
        let mut ledger = ScoreLedger::new(&hs, ANSWER_COST, 0);
        ledger.spend_hint(&hs[0]);
        assert_eq!(ledger.points(), 5200 - 50);
        ledger.penalize_wrong_guess();
        assert_eq!(ledger.points(), 5200 - 150);
        // Double spend is not defended here.
        ledger.spend_hint(&hs[0]);
        assert_eq!(ledger.points(), 5200 - 200);
    }

    #[test]
    fn test_goes_negative() {
        let hs = hints();
        let mut ledger = ScoreLedger::new(&hs, ANSWER_COST, 0);
        for h in &hs {
            ledger.spend_hint(h);
        }
        assert_eq!(ledger.points(), 100);
        ledger.penalize_wrong_guess();
        ledger.penalize_wrong_guess();
        assert_eq!(ledger.points(), -100);
    }
}
