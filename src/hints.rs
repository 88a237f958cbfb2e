//! Hint generation: one frozen clue per [`HintKind`], cheapest first.
//!
//! | Tier | Kinds |
//! |------|-------|
//! | low (50–120) | length, arity, scope, trailing `?`/`!`/`=`, underscore count |
//! | mid (200–300) | category, owner, parameter shapes |
//! | high (400–1000) | first/last/second char, vowel count, shuffled chars, underscore mask |
//!
//! Content is derived once here and never recomputed; the shuffle is the only
//! random clue.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{MASK_GLYPH, NO_SECOND_CHAR};
use crate::types::{Answer, Hint, HintKind, HintValue, Scope};

/// Build every hint for `answer`, sorted ascending by cost (stable).
pub fn generate_hints<R: Rng + ?Sized>(answer: &Answer, rng: &mut R) -> Vec<Hint> {
    let mut hints: Vec<Hint> = HintKind::ALL
        .iter()
        .map(|&kind| Hint::new(kind, derive_content(kind, answer, rng)))
        .collect();
    hints.sort_by_key(|h| h.cost);
    hints
}

/// Derive one hint's content from the answer.
pub fn derive_content<R: Rng + ?Sized>(kind: HintKind, answer: &Answer, rng: &mut R) -> HintValue {
    let name = answer.name.as_str();
    let op = &answer.operation;

    match kind {
        HintKind::Length => HintValue::Int(name.chars().count() as i64),
        HintKind::Arity => HintValue::Int(op.arity as i64),
        HintKind::IsInstance => HintValue::Bool(op.scope == Scope::Instance),
        HintKind::EndsWithQuestion => HintValue::Bool(name.ends_with('?')),
        HintKind::EndsWithBang => HintValue::Bool(name.ends_with('!')),
        HintKind::EndsWithEquals => HintValue::Bool(name.ends_with('=')),
        HintKind::UnderscoreCount => HintValue::Int(count_char(name, '_') as i64),
        HintKind::CategoryName => HintValue::Text(op.category.as_str().to_string()),
        HintKind::Owner => HintValue::Text(op.owner.to_string()),
        HintKind::Parameters => HintValue::Params(op.parameters.to_vec()),
        HintKind::FirstChar => HintValue::Text(char_text(name.chars().next())),
        HintKind::LastChar => HintValue::Text(char_text(name.chars().last())),
        HintKind::SecondChar => match name.chars().nth(1) {
            Some(c) => HintValue::Text(c.to_string()),
            None => HintValue::Text(NO_SECOND_CHAR.to_string()),
        },
        HintKind::VowelCount => HintValue::Int(vowel_count(name) as i64),
        HintKind::Shuffled => {
            let mut chars: Vec<char> = name.chars().collect();
            chars.shuffle(rng);
            HintValue::Text(chars.into_iter().collect())
        }
        HintKind::UnderscoreMask => HintValue::Text(underscore_mask(name)),
    }
}

fn char_text(c: Option<char>) -> String {
    c.map(|c| c.to_string()).unwrap_or_default()
}

fn count_char(s: &str, target: char) -> usize {
    s.chars().filter(|&c| c == target).count()
}

/// Count of a/e/i/o/u after lowercasing.
pub fn vowel_count(s: &str) -> usize {
    s.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Replace every non-underscore character with [`MASK_GLYPH`].
pub fn underscore_mask(s: &str) -> String {
    s.chars()
        .map(|c| if c == '_' { '_' } else { MASK_GLYPH })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::Category;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn answer(category: Category, scope: Scope, name: &str) -> Answer {
        Catalog::builtin()
            .unwrap()
            .find(category, scope, name)
            .unwrap()
    }

    fn content(hints: &[Hint], kind: HintKind) -> String {
        hints
            .iter()
            .find(|h| h.kind == kind)
            .map(|h| h.content.to_string())
            .unwrap()
    }

    #[test]
    fn test_sorted_by_cost() {
        let mut rng = SmallRng::seed_from_u64(3);
        let hints = generate_hints(&answer(Category::Array, Scope::Instance, "push"), &mut rng);
        assert_eq!(hints.len(), HintKind::ALL.len());
        for w in hints.windows(2) {
            assert!(w[0].cost <= w[1].cost);
        }
        // Ties keep generation order.
        assert_eq!(hints[0].kind, HintKind::Length);
        assert_eq!(hints[1].kind, HintKind::Arity);
        assert_eq!(hints[3].kind, HintKind::EndsWithQuestion);
        assert_eq!(hints[5].kind, HintKind::EndsWithEquals);
    }

    #[test]
    fn test_push_contents() {
        let mut rng = SmallRng::seed_from_u64(3);
        let hints = generate_hints(&answer(Category::Array, Scope::Instance, "push"), &mut rng);
        assert_eq!(content(&hints, HintKind::Length), "4");
        assert_eq!(content(&hints, HintKind::Arity), "-1");
        assert_eq!(content(&hints, HintKind::IsInstance), "true");
        assert_eq!(content(&hints, HintKind::EndsWithQuestion), "false");
        assert_eq!(content(&hints, HintKind::UnderscoreCount), "0");
        assert_eq!(content(&hints, HintKind::CategoryName), "Array");
        assert_eq!(content(&hints, HintKind::Owner), "Array");
        assert_eq!(content(&hints, HintKind::Parameters), "[[:rest]]");
        assert_eq!(content(&hints, HintKind::FirstChar), "p");
        assert_eq!(content(&hints, HintKind::LastChar), "h");
        assert_eq!(content(&hints, HintKind::SecondChar), "u");
        assert_eq!(content(&hints, HintKind::VowelCount), "1");
        assert_eq!(content(&hints, HintKind::UnderscoreMask), "○○○○");

        let mut shuffled: Vec<char> = content(&hints, HintKind::Shuffled).chars().collect();
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec!['h', 'p', 's', 'u']);
    }

    #[test]
    fn test_category_level_and_suffixes() {
        let mut rng = SmallRng::seed_from_u64(5);
        let hints = generate_hints(
            &answer(Category::File, Scope::CategoryLevel, "exist?"),
            &mut rng,
        );
        assert_eq!(content(&hints, HintKind::IsInstance), "false");
        assert_eq!(content(&hints, HintKind::EndsWithQuestion), "true");
        assert_eq!(content(&hints, HintKind::Owner), "#<Class:File>");

        let hints = generate_hints(
            &answer(Category::Hash, Scope::Instance, "default="),
            &mut rng,
        );
        assert_eq!(content(&hints, HintKind::EndsWithEquals), "true");
        assert_eq!(content(&hints, HintKind::EndsWithBang), "false");
    }

    #[test]
    fn test_underscore_hints() {
        let mut rng = SmallRng::seed_from_u64(11);
        let hints = generate_hints(
            &answer(Category::Array, Scope::Instance, "each_with_index"),
            &mut rng,
        );
        assert_eq!(content(&hints, HintKind::UnderscoreCount), "2");
        assert_eq!(content(&hints, HintKind::UnderscoreMask), "○○○○_○○○○_○○○○○");
        assert_eq!(content(&hints, HintKind::Owner), "Enumerable");
    }

    #[test]
    fn test_single_char_name() {
        let mut rng = SmallRng::seed_from_u64(0);
        let hints = generate_hints(&answer(Category::Regexp, Scope::Instance, "~"), &mut rng);
        assert_eq!(content(&hints, HintKind::SecondChar), NO_SECOND_CHAR);
        assert_eq!(content(&hints, HintKind::FirstChar), "~");
        assert_eq!(content(&hints, HintKind::LastChar), "~");
        assert_eq!(content(&hints, HintKind::UnderscoreMask), "○");
    }

    #[test]
    fn test_regeneration_keeps_cost_and_description() {
        let a = answer(Category::String, Scope::Instance, "unicode_normalize");
        let h1 = generate_hints(&a, &mut SmallRng::seed_from_u64(1));
        let h2 = generate_hints(&a, &mut SmallRng::seed_from_u64(2));
        let pairs = |hs: &[Hint]| -> Vec<(i64, &'static str)> {
            hs.iter().map(|h| (h.cost, h.description)).collect()
        };
        assert_eq!(pairs(&h1), pairs(&h2));
        for (x, y) in h1.iter().zip(&h2) {
            if x.kind != HintKind::Shuffled {
                assert_eq!(x.content, y.content);
            }
        }
    }

    #[test]
    fn test_vowels_and_mask_helpers() {
        assert_eq!(vowel_count("AEIOUxyz"), 5);
        assert_eq!(vowel_count("rjust"), 1);
        assert_eq!(underscore_mask("_a_b"), "_○_○");
        assert_eq!(underscore_mask(""), "");
    }
}
