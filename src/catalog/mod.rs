//! Operation catalog: the pool of answers a round can be drawn from.
//!
//! The catalog is static configuration ([`data`]). Building a [`Catalog`]
//! subtracts the universal exclusion set (behavior every category inherits
//! from the base object model) from each category's instance-scope and
//! category-scope lists, then checks that every category still has at least
//! one eligible operation. A category with an empty category-scope list is
//! legal; selection forces instance scope for it.

pub mod data;

use std::collections::HashSet;

use crate::types::{Answer, Category, Operation, ParamSpec, Scope};

/// Errors raised while building a catalog. These are configuration bugs,
/// never runtime conditions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    Empty,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(Category),

    #[error("No eligible operations for category {0}")]
    NoEligibleOperations(Category),
}

/// Offline-precomputed descriptor of one operation.
#[derive(Clone, Copy, Debug)]
pub struct OperationSpec {
    pub name: &'static str,
    pub arity: i32,
    pub parameters: &'static [ParamSpec],
    pub owner: &'static str,
}

/// Raw (unfiltered) operation lists for one category.
#[derive(Clone, Copy, Debug)]
pub struct CategorySpec {
    pub category: Category,
    pub instance: &'static [OperationSpec],
    pub category_level: &'static [OperationSpec],
}

/// Eligible operations of one category after exclusion.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub category: Category,
    pub instance: Vec<Operation>,
    pub category_level: Vec<Operation>,
}

impl CatalogEntry {
    pub fn eligible(&self, scope: Scope) -> &[Operation] {
        match scope {
            Scope::Instance => &self.instance,
            Scope::CategoryLevel => &self.category_level,
        }
    }

    /// Scopes with at least one eligible operation, instance first.
    pub fn available_scopes(&self) -> Vec<Scope> {
        [Scope::Instance, Scope::CategoryLevel]
            .into_iter()
            .filter(|s| !self.eligible(*s).is_empty())
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from raw specs, subtracting `excluded` names.
    pub fn new(specs: &[CategorySpec], excluded: &[&str]) -> Result<Self, CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let excluded: HashSet<&str> = excluded.iter().copied().collect();
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.category) {
                return Err(CatalogError::DuplicateCategory(spec.category));
            }

            let filter = |ops: &[OperationSpec], scope: Scope| -> Vec<Operation> {
                ops.iter()
                    .filter(|op| !excluded.contains(op.name))
                    .map(|op| Operation {
                        category: spec.category,
                        name: op.name,
                        scope,
                        arity: op.arity,
                        parameters: op.parameters,
                        owner: op.owner,
                    })
                    .collect()
            };

            let entry = CatalogEntry {
                category: spec.category,
                instance: filter(spec.instance, Scope::Instance),
                category_level: filter(spec.category_level, Scope::CategoryLevel),
            };
            if entry.instance.is_empty() && entry.category_level.is_empty() {
                return Err(CatalogError::NoEligibleOperations(spec.category));
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// The bundled catalog of built-in categories.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::BUILTIN_CATEGORIES, data::UNIVERSAL_EXCLUSIONS)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    pub fn entry(&self, category: Category) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn eligible(&self, category: Category, scope: Scope) -> &[Operation] {
        self.entry(category)
            .map(|e| e.eligible(scope))
            .unwrap_or(&[])
    }

    /// Look up a specific eligible operation and wrap it as an answer.
    pub fn find(&self, category: Category, scope: Scope, name: &str) -> Option<Answer> {
        self.eligible(category, scope)
            .iter()
            .find(|op| op.name == name)
            .map(|op| Answer::new(*op))
    }

    /// Total number of eligible operations across all categories and scopes.
    pub fn operation_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.instance.len() + e.category_level.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamKind;

    const NO_PARAMS: &[ParamSpec] = &[];
    const ONE_REQ: &[ParamSpec] = &[ParamSpec::anon(ParamKind::Req)];

    const fn op(name: &'static str) -> OperationSpec {
        OperationSpec {
            name,
            arity: 0,
            parameters: NO_PARAMS,
            owner: "Test",
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.entries().len(), Category::ALL.len());
        for category in Category::ALL {
            let entry = catalog.entry(category).unwrap();
            assert!(
                !entry.available_scopes().is_empty(),
                "{category} has nothing to draw"
            );
        }
        assert!(catalog.operation_count() > 300);
    }

    #[test]
    fn test_builtin_exclusions_applied() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.entries() {
            for scope in [Scope::Instance, Scope::CategoryLevel] {
                for op in entry.eligible(scope) {
                    assert!(
                        !data::UNIVERSAL_EXCLUSIONS.contains(&op.name),
                        "{} should be excluded",
                        op.qualified_name()
                    );
                    assert_eq!(op.scope, scope);
                    assert_eq!(op.category, entry.category);
                }
            }
        }
        // Raw data lists these; they must not survive.
        assert!(catalog.find(Category::Array, Scope::Instance, "to_s").is_none());
        assert!(catalog.find(Category::Array, Scope::Instance, "include?").is_none());
        assert!(catalog.find(Category::Time, Scope::CategoryLevel, "new").is_none());
    }

    #[test]
    fn test_builtin_forced_instance_categories() {
        let catalog = Catalog::builtin().unwrap();
        for category in [Category::Float, Category::Range] {
            let entry = catalog.entry(category).unwrap();
            assert_eq!(entry.available_scopes(), vec![Scope::Instance]);
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin().unwrap();
        let answer = catalog.find(Category::Array, Scope::Instance, "push").unwrap();
        assert_eq!(answer.name, "push");
        assert_eq!(answer.operation.owner, "Array");
        assert!(catalog.find(Category::Array, Scope::CategoryLevel, "push").is_none());
    }

    #[test]
    fn test_rejects_fully_excluded_category() {
        static INSTANCE: &[OperationSpec] = &[op("to_s"), op("inspect")];
        let specs = [CategorySpec {
            category: Category::Symbol,
            instance: INSTANCE,
            category_level: &[],
        }];
        let err = Catalog::new(&specs, &["to_s", "inspect"]).unwrap_err();
        assert!(matches!(err, CatalogError::NoEligibleOperations(Category::Symbol)));
    }

    #[test]
    fn test_rejects_duplicate_and_empty() {
        static INSTANCE: &[OperationSpec] = &[op("length")];
        let spec = CategorySpec {
            category: Category::String,
            instance: INSTANCE,
            category_level: &[],
        };
        assert!(matches!(
            Catalog::new(&[spec, spec], &[]),
            Err(CatalogError::DuplicateCategory(Category::String))
        ));
        assert!(matches!(Catalog::new(&[], &[]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_category_level_only_is_allowed() {
        static LEVEL: &[OperationSpec] = &[OperationSpec {
            name: "sqrt",
            arity: 1,
            parameters: ONE_REQ,
            owner: "#<Class:Integer>",
        }];
        let specs = [CategorySpec {
            category: Category::Integer,
            instance: &[],
            category_level: LEVEL,
        }];
        let catalog = Catalog::new(&specs, &[]).unwrap();
        let entry = catalog.entry(Category::Integer).unwrap();
        assert_eq!(entry.available_scopes(), vec![Scope::CategoryLevel]);
    }
}
