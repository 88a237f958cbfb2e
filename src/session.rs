//! Quiz session: orchestrates rounds and owns the guess/hint contract.
//!
//! A session holds the catalog, the player's persisted stats, the life
//! budget and the current [`Round`]. Rounds move through
//!
//! ```text
//! Active ──correct guess──▶ Corrected
//!   │
//!   └──last heart lost────▶ GameOver
//! ```
//!
//! The engine does not hard-block guesses after either transition; the host
//! disables input. With [`SessionOptions::single_attempt_after_correct`] set,
//! guesses after a win are rejected instead.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogError};
use crate::constants::{ANSWER_COST, DEFAULT_MAX_LIFE};
use crate::hints::generate_hints;
use crate::ledger::ScoreLedger;
use crate::life::LifeTracker;
use crate::selector::AnswerSelector;
use crate::stats::PlayerStats;
use crate::storage::{StatsStore, StoreError};
use crate::types::{Answer, Category, Hint, HintKind, Scope};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unknown hint index {index} (round has {count} hints)")]
    UnknownHint { index: usize, count: usize },

    #[error("Game over: no hearts left, restart the session")]
    GameOver,
}

/// Whether hearts carry over between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifePolicy {
    /// One life budget for the whole session.
    PerSession,
    /// Hearts refill at the start of every round.
    PerRound,
}

impl LifePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" | "per_session" => Some(LifePolicy::PerSession),
            "round" | "per_round" => Some(LifePolicy::PerRound),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionOptions {
    pub max_life: u32,
    pub life_policy: LifePolicy,
    /// Reject further guesses once the round has been won.
    pub single_attempt_after_correct: bool,
    /// Fixed seed for reproducible answers and shuffles.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_life: DEFAULT_MAX_LIFE,
            life_policy: LifePolicy::PerSession,
            single_attempt_after_correct: false,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    /// Ignored: the round was already won in single-attempt mode.
    Rejected,
}

impl GuessOutcome {
    /// Whether this particular guess was right (not whether the round is won).
    pub fn was_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    Active,
    Corrected,
    GameOver,
}

/// One hidden answer with its hints, log and points.
#[derive(Clone, Debug)]
pub struct Round {
    answer: Answer,
    hints: Vec<Hint>,
    revealed: Vec<bool>,
    answer_log: Vec<String>,
    corrected: bool,
    ledger: ScoreLedger,
}

impl Round {
    fn new(answer: Answer, hints: Vec<Hint>, streak_bonus: i64) -> Self {
        let ledger = ScoreLedger::new(&hints, ANSWER_COST, streak_bonus);
        Self {
            revealed: vec![false; hints.len()],
            answer,
            hints,
            answer_log: Vec::new(),
            corrected: false,
            ledger,
        }
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn answer_log(&self) -> &[String] {
        &self.answer_log
    }

    pub fn is_corrected(&self) -> bool {
        self.corrected
    }

    pub fn points(&self) -> i64 {
        self.ledger.points()
    }
}

pub struct QuizSession<S: StatsStore> {
    catalog: Catalog,
    options: SessionOptions,
    stats: PlayerStats<S>,
    life: LifeTracker,
    round: Round,
    rounds_started: u32,
    rng: SmallRng,
    warnings: Vec<String>,
}

impl<S: StatsStore> QuizSession<S> {
    /// Build a session over the bundled catalog and start the first round.
    pub fn new(store: S, options: SessionOptions) -> Result<Self, SessionError> {
        let catalog = Catalog::builtin()?;
        Ok(Self::with_catalog(catalog, store, options))
    }

    pub fn with_catalog(catalog: Catalog, store: S, options: SessionOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let stats = PlayerStats::load(store);
        let answer = AnswerSelector::new(&catalog).select(&mut rng);
        let hints = generate_hints(&answer, &mut rng);
        let round = Round::new(answer, hints, stats.streak_bonus());
        tracing::debug!(points = round.points(), "Session started");

        Self {
            catalog,
            life: LifeTracker::new(options.max_life),
            options,
            stats,
            round,
            rounds_started: 1,
            rng,
            warnings: Vec::new(),
        }
    }

    /// Draw a fresh answer. Stats carry over; hearts refill only under
    /// [`LifePolicy::PerRound`]. With no hearts left the current round is
    /// kept and [`SessionError::GameOver`] is returned; only
    /// [`restart`](Self::restart) continues from there.
    pub fn start_new_round(&mut self) -> Result<(), SessionError> {
        self.ensure_hearts_for_round()?;
        let answer = AnswerSelector::new(&self.catalog).select(&mut self.rng);
        self.start_round_with(answer)
    }

    /// Start a round on a chosen answer (fixed puzzles, replays).
    pub fn start_round_with(&mut self, answer: Answer) -> Result<(), SessionError> {
        self.ensure_hearts_for_round()?;
        let hints = generate_hints(&answer, &mut self.rng);
        self.round = Round::new(answer, hints, self.stats.streak_bonus());
        self.rounds_started += 1;
        tracing::debug!(
            round = self.rounds_started,
            points = self.round.points(),
            hearts = self.life.current(),
            "Round started"
        );
        Ok(())
    }

    fn ensure_hearts_for_round(&mut self) -> Result<(), SessionError> {
        if self.options.life_policy == LifePolicy::PerRound {
            self.life.reset();
        }
        if self.life.is_game_over() {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    /// Begin again from a full life budget. Stats are re-read from the store
    /// so another writer's changes are picked up.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.stats.reload();
        self.life = LifeTracker::new(self.options.max_life);
        self.rounds_started = 0;
        self.warnings.clear();
        self.start_new_round()?;
        tracing::info!(streak = self.stats.streak(), "Session restarted");
        Ok(())
    }

    /// Compare `text` exactly against the answer and apply the consequences.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        if self.options.single_attempt_after_correct && self.round.corrected {
            return GuessOutcome::Rejected;
        }

        let was_correct = self.round.answer.matches(text);
        self.round.answer_log.push(text.to_string());

        if was_correct {
            self.round.corrected = true;
            let r = self.stats.increase_streak();
            self.note_store_result(r);
            let r = self.stats.increase_total_correct();
            self.note_store_result(r);
            let r = self.stats.record_score_if_best(self.round.ledger.points());
            self.note_store_result(r.map(|_| ()));
            tracing::info!(
                answer = %self.round.answer.operation.qualified_name(),
                points = self.round.points(),
                streak = self.stats.streak(),
                "Correct guess"
            );
            GuessOutcome::Correct
        } else {
            self.round.ledger.penalize_wrong_guess();
            let r = self.stats.reset_streak();
            self.note_store_result(r);
            self.life.decrease();
            if self.life.is_game_over() {
                tracing::info!(
                    answer = %self.round.answer.operation.qualified_name(),
                    points = self.round.points(),
                    "Game over"
                );
            }
            GuessOutcome::Incorrect
        }
    }

    /// Debit hint `index` and mark it revealed.
    ///
    /// Precondition: each hint is revealed at most once. Repeated calls debit
    /// again; the host is expected to disable the control after one reveal.
    pub fn reveal_hint(&mut self, index: usize) -> Result<&Hint, SessionError> {
        let count = self.round.hints.len();
        let hint = self
            .round
            .hints
            .get(index)
            .ok_or(SessionError::UnknownHint { index, count })?;
        self.round.ledger.spend_hint(hint);
        self.round.revealed[index] = true;
        Ok(hint)
    }

    pub fn is_game_over(&self) -> bool {
        self.life.is_game_over()
    }

    pub fn is_corrected(&self) -> bool {
        self.round.corrected
    }

    pub fn state(&self) -> RoundState {
        if self.life.is_game_over() {
            RoundState::GameOver
        } else if self.round.corrected {
            RoundState::Corrected
        } else {
            RoundState::Active
        }
    }

    pub fn points(&self) -> i64 {
        self.round.points()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn stats(&self) -> &PlayerStats<S> {
        &self.stats
    }

    pub fn life(&self) -> &LifeTracker {
        &self.life
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Drain persistence warnings collected since the last call.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn into_store(self) -> S {
        self.stats.into_store()
    }

    /// Everything a host needs to render the current state. The answer is
    /// included only once the round is over.
    pub fn snapshot(&self) -> SessionSnapshot {
        let round = &self.round;
        let state = self.state();
        let hints = round
            .hints
            .iter()
            .enumerate()
            .map(|(index, h)| {
                let revealed = round.revealed[index];
                HintView {
                    index,
                    kind: h.kind,
                    cost: h.cost,
                    description: h.description,
                    revealed,
                    content: revealed.then(|| h.content.to_string()),
                }
            })
            .collect();

        SessionSnapshot {
            round: self.rounds_started,
            state,
            points: round.points(),
            streak: self.stats.streak(),
            total_correct: self.stats.total_correct(),
            best_score: self.stats.best_score(),
            combo_multiplier: self.stats.combo_multiplier(),
            hearts: self.life,
            hints,
            answer_log: round.answer_log.clone(),
            corrected: round.corrected,
            game_over: self.life.is_game_over(),
            answer: (state != RoundState::Active).then(|| AnswerReveal::from(&round.answer)),
        }
    }

    fn note_store_result(&mut self, result: Result<(), StoreError>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist player stats");
            self.warnings.push(e.to_string());
        }
    }
}

// ── Outbound view ──

#[derive(Clone, Debug, Serialize)]
pub struct HintView {
    pub index: usize,
    pub kind: HintKind,
    pub cost: i64,
    pub description: &'static str,
    pub revealed: bool,
    pub content: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnswerReveal {
    pub name: String,
    pub qualified_name: String,
    pub category: Category,
    pub scope: Scope,
    pub owner: &'static str,
}

impl From<&Answer> for AnswerReveal {
    fn from(answer: &Answer) -> Self {
        let op = &answer.operation;
        Self {
            name: answer.name.clone(),
            qualified_name: op.qualified_name(),
            category: op.category,
            scope: op.scope,
            owner: op.owner,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub round: u32,
    pub state: RoundState,
    pub points: i64,
    pub streak: u32,
    pub total_correct: u32,
    pub best_score: i64,
    pub combo_multiplier: f64,
    pub hearts: LifeTracker,
    pub hints: Vec<HintView>,
    pub answer_log: Vec<String>,
    pub corrected: bool,
    pub game_over: bool,
    pub answer: Option<AnswerReveal>,
}
