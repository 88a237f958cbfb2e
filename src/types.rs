//! Core value types: categories, operations, answers and hints.

use std::fmt;

use serde::Serialize;

// ── Category ──

/// Built-in data-type grouping an operation is drawn from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Category {
    Array,
    Dir,
    File,
    Hash,
    Integer,
    Float,
    Random,
    Range,
    Regexp,
    String,
    Symbol,
    Thread,
    Time,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Array,
        Category::Dir,
        Category::File,
        Category::Hash,
        Category::Integer,
        Category::Float,
        Category::Random,
        Category::Range,
        Category::Regexp,
        Category::String,
        Category::Symbol,
        Category::Thread,
        Category::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Array => "Array",
            Category::Dir => "Dir",
            Category::File => "File",
            Category::Hash => "Hash",
            Category::Integer => "Integer",
            Category::Float => "Float",
            Category::Random => "Random",
            Category::Range => "Range",
            Category::Regexp => "Regexp",
            Category::String => "String",
            Category::Symbol => "Symbol",
            Category::Thread => "Thread",
            Category::Time => "Time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Scope ──

/// Whether an operation is called on an instance or on the category itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Instance,
    CategoryLevel,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Instance => "instance",
            Scope::CategoryLevel => "category_level",
        }
    }

    /// Separator used when printing a fully-qualified name (`Array#push`, `File.read`).
    pub fn separator(&self) -> &'static str {
        match self {
            Scope::Instance => "#",
            Scope::CategoryLevel => ".",
        }
    }
}

// ── Parameters ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParamKind {
    Req,
    Opt,
    Rest,
    KeyReq,
    Key,
    KeyRest,
    Block,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Req => "req",
            ParamKind::Opt => "opt",
            ParamKind::Rest => "rest",
            ParamKind::KeyReq => "keyreq",
            ParamKind::Key => "key",
            ParamKind::KeyRest => "keyrest",
            ParamKind::Block => "block",
        }
    }
}

/// One entry of an operation's parameter list; natively implemented
/// operations often carry no parameter names.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParamSpec {
    pub kind: ParamKind,
    pub name: Option<&'static str>,
}

impl ParamSpec {
    pub const fn anon(kind: ParamKind) -> Self {
        Self { kind, name: None }
    }

    pub const fn named(kind: ParamKind, name: &'static str) -> Self {
        Self {
            kind,
            name: Some(name),
        }
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "[:{}, :{}]", self.kind.as_str(), name),
            None => write!(f, "[:{}]", self.kind.as_str()),
        }
    }
}

// ── Operation / Answer ──

/// A callable member of a category, with metadata precomputed offline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Operation {
    pub category: Category,
    pub name: &'static str,
    pub scope: Scope,
    /// Negative arity means variadic with `-arity - 1` required arguments.
    pub arity: i32,
    pub parameters: &'static [ParamSpec],
    /// Where the operation is actually defined (may differ from `category`).
    pub owner: &'static str,
}

impl Operation {
    /// `Array#push` / `File.read` style display name.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}{}{}",
            self.category.as_str(),
            self.scope.separator(),
            self.name
        )
    }
}

/// The round's hidden target.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Answer {
    pub operation: Operation,
    /// Exact text the player must type; compared case-sensitively.
    pub name: String,
}

impl Answer {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            name: operation.name.to_string(),
        }
    }

    #[inline]
    pub fn matches(&self, guess: &str) -> bool {
        guess == self.name
    }
}

// ── Hints ──

/// Fixed catalog of clue kinds, listed in generation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    Length,
    Arity,
    IsInstance,
    EndsWithQuestion,
    EndsWithBang,
    EndsWithEquals,
    UnderscoreCount,
    CategoryName,
    Owner,
    Parameters,
    FirstChar,
    LastChar,
    SecondChar,
    VowelCount,
    Shuffled,
    UnderscoreMask,
}

impl HintKind {
    pub const ALL: [HintKind; 16] = [
        HintKind::Length,
        HintKind::Arity,
        HintKind::IsInstance,
        HintKind::EndsWithQuestion,
        HintKind::EndsWithBang,
        HintKind::EndsWithEquals,
        HintKind::UnderscoreCount,
        HintKind::CategoryName,
        HintKind::Owner,
        HintKind::Parameters,
        HintKind::FirstChar,
        HintKind::LastChar,
        HintKind::SecondChar,
        HintKind::VowelCount,
        HintKind::Shuffled,
        HintKind::UnderscoreMask,
    ];

    pub fn cost(&self) -> i64 {
        match self {
            HintKind::Length => 50,
            HintKind::Arity => 50,
            HintKind::IsInstance => 80,
            HintKind::EndsWithQuestion => 100,
            HintKind::EndsWithBang => 100,
            HintKind::EndsWithEquals => 100,
            HintKind::UnderscoreCount => 120,
            HintKind::CategoryName => 200,
            HintKind::Owner => 250,
            HintKind::Parameters => 300,
            HintKind::FirstChar => 400,
            HintKind::LastChar => 450,
            HintKind::SecondChar => 500,
            HintKind::VowelCount => 600,
            HintKind::Shuffled => 800,
            HintKind::UnderscoreMask => 1000,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HintKind::Length => "#length",
            HintKind::Arity => "#arity",
            HintKind::IsInstance => "is_instance_method?",
            HintKind::EndsWithQuestion => "end_with?('?')",
            HintKind::EndsWithBang => "end_with?('!')",
            HintKind::EndsWithEquals => "end_with?('=')",
            HintKind::UnderscoreCount => "#count('_')",
            HintKind::CategoryName => "category",
            HintKind::Owner => "#owner",
            HintKind::Parameters => "#parameters",
            HintKind::FirstChar => "#chars.first",
            HintKind::LastChar => "#chars.last",
            HintKind::SecondChar => "#chars[1]",
            HintKind::VowelCount => "vowel_count",
            HintKind::Shuffled => "#chars.shuffle",
            HintKind::UnderscoreMask => "underscore_mask",
        }
    }
}

/// Frozen content of a hint.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HintValue {
    Int(i64),
    Bool(bool),
    Text(String),
    Params(Vec<ParamSpec>),
}

impl fmt::Display for HintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintValue::Int(n) => write!(f, "{}", n),
            HintValue::Bool(b) => write!(f, "{}", b),
            HintValue::Text(s) => f.write_str(s),
            HintValue::Params(params) => {
                f.write_str("[")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hint {
    pub kind: HintKind,
    pub cost: i64,
    pub description: &'static str,
    pub content: HintValue,
}

impl Hint {
    pub fn new(kind: HintKind, content: HintValue) -> Self {
        Self {
            kind,
            cost: kind.cost(),
            description: kind.description(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUSH_PARAMS: &[ParamSpec] = &[ParamSpec::anon(ParamKind::Rest)];

    fn push() -> Operation {
        Operation {
            category: Category::Array,
            name: "push",
            scope: Scope::Instance,
            arity: -1,
            parameters: PUSH_PARAMS,
            owner: "Array",
        }
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(push().qualified_name(), "Array#push");
        let read = Operation {
            category: Category::File,
            scope: Scope::CategoryLevel,
            name: "read",
            ..push()
        };
        assert_eq!(read.qualified_name(), "File.read");
    }

    #[test]
    fn test_answer_matches_exactly() {
        let answer = Answer::new(push());
        assert!(answer.matches("push"));
        assert!(!answer.matches("Push"));
        assert!(!answer.matches(" push"));
        assert!(!answer.matches(""));
    }

    #[test]
    fn test_hint_value_display() {
        assert_eq!(HintValue::Int(-1).to_string(), "-1");
        assert_eq!(HintValue::Bool(true).to_string(), "true");
        assert_eq!(HintValue::Text("p".into()).to_string(), "p");
        assert_eq!(HintValue::Params(vec![]).to_string(), "[]");
        let params = vec![
            ParamSpec::named(ParamKind::Req, "index"),
            ParamSpec::anon(ParamKind::Opt),
        ];
        assert_eq!(
            HintValue::Params(params).to_string(),
            "[[:req, :index], [:opt]]"
        );
    }

    #[test]
    fn test_hint_kind_table() {
        let total: i64 = HintKind::ALL.iter().map(|k| k.cost()).sum();
        assert_eq!(total, 5100);
        assert!(HintKind::ALL.iter().all(|k| k.cost() >= 0));
    }
}
