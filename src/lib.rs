//! # Method Guesser: a trivia engine over a standard library's methods
//!
//! Each round hides one operation (a method name of a built-in category such
//! as `Array` or `Hash`). The player guesses names; every hint they reveal
//! and every wrong guess costs points, and wrong guesses cost hearts.
//!
//! ## Round flow
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`selector`] | Uniform category, then uniform scope, then uniform operation |
//! | 2 | [`hints`] | 16 hint kinds derived from the answer, ordered cheapest first |
//! | 3 | [`ledger`] | Points start at Σ hint costs + answer cost + streak bonus |
//! | 4 | [`session`] | Guesses and reveals debit the ledger and update [`stats`] / [`life`] |
//!
//! Player statistics (streak, lifetime correct answers, best score) persist
//! through a [`storage::StatsStore`]. The streak drives a combo multiplier
//! (1.0 / 1.5 / 2.0 / 3.0 at streaks 0-2 / 3-5 / 6-9 / 10+) that scales the
//! next round's starting bonus.
//!
//! The [`server`] module exposes a session over HTTP for a browser front end.

pub mod catalog;
pub mod constants;
pub mod env_config;
pub mod hints;
pub mod ledger;
pub mod life;
pub mod selector;
pub mod server;
pub mod session;
pub mod stats;
pub mod storage;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use session::{GuessOutcome, LifePolicy, QuizSession, RoundState, SessionError, SessionOptions};
pub use storage::{FileStore, MemoryStore, StatsStore, StoreError};
