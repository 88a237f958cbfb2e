//! Environment configuration shared by the binaries.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `GUESSER_BASE_PATH` | `.` | working directory |
//! | `GUESSER_PORT` | 9000 | HTTP port |
//! | `GUESSER_STATS_PATH` | `data/stats.json` | persisted stats file |
//! | `GUESSER_MAX_LIFE` | 3 | hearts per budget |
//! | `GUESSER_LIFE_POLICY` | `session` | `session` or `round` |
//! | `GUESSER_SINGLE_SHOT` | off | reject guesses after a win |
//! | `GUESSER_SEED` | unset | fixed RNG seed |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_LIFE, DEFAULT_STATS_PATH};
use crate::session::{LifePolicy, SessionOptions};

/// Read `GUESSER_BASE_PATH` (default `"."`) and chdir into it.
pub fn init_base_path() -> std::io::Result<PathBuf> {
    let base_path = std::env::var("GUESSER_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    std::env::set_current_dir(&base_path)?;
    let cwd = std::env::current_dir()?;
    tracing::info!(base_path = %base_path, cwd = %cwd.display(), "Working directory set");
    Ok(cwd)
}

/// Read `GUESSER_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("GUESSER_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}

/// Read `GUESSER_STATS_PATH`.
pub fn stats_path() -> PathBuf {
    std::env::var("GUESSER_STATS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATS_PATH))
}

pub fn session_options() -> SessionOptions {
    session_options_from(|key| std::env::var(key).ok())
}

/// Build options from any variable lookup.
pub fn session_options_from<F>(lookup: F) -> SessionOptions
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SessionOptions::default();
    SessionOptions {
        max_life: lookup("GUESSER_MAX_LIFE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_LIFE),
        life_policy: lookup("GUESSER_LIFE_POLICY")
            .and_then(|s| LifePolicy::parse(&s))
            .unwrap_or(defaults.life_policy),
        single_attempt_after_correct: lookup("GUESSER_SINGLE_SHOT")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.single_attempt_after_correct),
        seed: lookup("GUESSER_SEED").and_then(|s| s.trim().parse().ok()),
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(session_options_from(lookup(&[])), SessionOptions::default());
    }

    #[test]
    fn test_overrides() {
        let opts = session_options_from(lookup(&[
            ("GUESSER_MAX_LIFE", "5"),
            ("GUESSER_LIFE_POLICY", "round"),
            ("GUESSER_SINGLE_SHOT", "true"),
            ("GUESSER_SEED", "42"),
        ]));
        assert_eq!(opts.max_life, 5);
        assert_eq!(opts.life_policy, LifePolicy::PerRound);
        assert!(opts.single_attempt_after_correct);
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let opts = session_options_from(lookup(&[
            ("GUESSER_MAX_LIFE", "lots"),
            ("GUESSER_LIFE_POLICY", "forever"),
            ("GUESSER_SINGLE_SHOT", "nope"),
            ("GUESSER_SEED", "-3"),
        ]));
        assert_eq!(opts.max_life, DEFAULT_MAX_LIFE);
        assert_eq!(opts.life_policy, LifePolicy::PerSession);
        assert!(!opts.single_attempt_after_correct);
        assert_eq!(opts.seed, None);
    }
}
