//! Answer selection: category, then scope, then operation, each uniform.

use rand::Rng;

use crate::catalog::{Catalog, CatalogEntry};
use crate::types::{Answer, Scope};

pub struct AnswerSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> AnswerSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Draw one answer. The catalog guarantees every category has at least one
    /// non-empty scope, so this never retries.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Answer {
        let entries = self.catalog.entries();
        let entry = &entries[rng.random_range(0..entries.len())];
        let scope = resolve_scope(entry, rng);
        let ops = entry.eligible(scope);
        let operation = ops[rng.random_range(0..ops.len())];

        tracing::debug!(
            category = %entry.category,
            scope = scope.as_str(),
            candidates = ops.len(),
            "Drew answer"
        );
        Answer::new(operation)
    }
}

/// Coin flip between scopes when both have candidates; otherwise the
/// non-empty one.
pub fn resolve_scope<R: Rng + ?Sized>(entry: &CatalogEntry, rng: &mut R) -> Scope {
    match (entry.instance.is_empty(), entry.category_level.is_empty()) {
        (false, false) => {
            if rng.random_bool(0.5) {
                Scope::Instance
            } else {
                Scope::CategoryLevel
            }
        }
        (true, false) => Scope::CategoryLevel,
        _ => Scope::Instance,
    }
}
