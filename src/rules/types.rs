//! Rule descriptor types
//!
//! A rule is one named predicate over a string plus the message reported
//! when it fails. Rules are immutable once built; schemas clone catalog
//! entries rather than sharing them, so overriding one schema's message
//! never leaks into another schema.

use regex::Regex;

/// Rule kinds recognized by the schema compiler.
///
/// Kind uniqueness is enforced by the builder: re-declaring a kind
/// overwrites the previous declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Minimum character count
    Minimum,
    /// Maximum character count
    Maximum,
    /// At least one digit
    Digit,
    /// At least one symbol
    Symbol,
    /// At least one uppercase letter
    Uppercase,
    /// At least one lowercase letter
    Lowercase,
    /// `local@domain.tld` shape
    Email,
    /// Equality with a sibling field
    Match,
}

impl RuleKind {
    /// Returns the kind name for logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Minimum => "minimum",
            RuleKind::Maximum => "maximum",
            RuleKind::Digit => "digit",
            RuleKind::Symbol => "symbol",
            RuleKind::Uppercase => "uppercase",
            RuleKind::Lowercase => "lowercase",
            RuleKind::Email => "email",
            RuleKind::Match => "match",
        }
    }

    /// Returns whether this kind is one of the required character classes
    /// (the kinds counted when deriving a default minimum length).
    pub fn is_character_class(&self) -> bool {
        matches!(
            self,
            RuleKind::Digit | RuleKind::Symbol | RuleKind::Uppercase | RuleKind::Lowercase
        )
    }
}

/// The predicate half of a rule.
#[derive(Debug, Clone)]
pub enum Check {
    /// The regex must find a match somewhere in the value
    Pattern(Regex),
    /// Character count must be at least this
    MinLength(usize),
    /// Character count must be at most this
    MaxLength(usize),
    /// The value must equal its paired value (evaluated in pair mode only)
    Equals,
}

/// A single named predicate plus its failure message.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    check: Check,
    error: String,
}

impl Rule {
    pub(crate) fn new(kind: RuleKind, check: Check, error: impl Into<String>) -> Self {
        Self {
            kind,
            check,
            error: error.into(),
        }
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the failure message.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Returns this rule with its message replaced.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// Evaluates the rule against a single value.
    ///
    /// `Equals` rules need a partner value and pass vacuously here; the
    /// validator routes schemas carrying a matching property through
    /// [`Rule::is_satisfied_by_pair`].
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match &self.check {
            Check::Pattern(re) => re.is_match(value),
            Check::MinLength(n) => value.chars().count() >= *n,
            Check::MaxLength(n) => value.chars().count() <= *n,
            Check::Equals => true,
        }
    }

    /// Evaluates the rule against a value and its match partner.
    pub fn is_satisfied_by_pair(&self, value: &str, other: &str) -> bool {
        match &self.check {
            Check::Equals => value == other,
            _ => self.is_satisfied_by(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_kind_names() {
        assert_eq!(RuleKind::Minimum.name(), "minimum");
        assert_eq!(RuleKind::Match.name(), "match");
        assert_eq!(RuleKind::Email.name(), "email");
    }

    #[test]
    fn test_character_class_kinds() {
        assert!(RuleKind::Digit.is_character_class());
        assert!(RuleKind::Symbol.is_character_class());
        assert!(RuleKind::Uppercase.is_character_class());
        assert!(RuleKind::Lowercase.is_character_class());
        assert!(!RuleKind::Minimum.is_character_class());
        assert!(!RuleKind::Email.is_character_class());
        assert!(!RuleKind::Match.is_character_class());
    }

    #[test]
    fn test_with_error_overrides_message() {
        let rule = rules::digit().with_error("needs a number");
        assert_eq!(rule.error(), "needs a number");
        assert_eq!(rule.kind(), RuleKind::Digit);
    }

    #[test]
    fn test_with_error_does_not_affect_catalog() {
        let _ = rules::digit().with_error("custom");
        assert_ne!(rules::digit().error(), "custom");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = rules::min_length(3);
        assert!(rule.is_satisfied_by("äöü"));
        let rule = rules::max_length(3);
        assert!(rule.is_satisfied_by("äöü"));
    }

    #[test]
    fn test_pair_evaluation() {
        let rule = rules::equals("password");
        assert!(rule.is_satisfied_by_pair("abc", "abc"));
        assert!(!rule.is_satisfied_by_pair("abc", "abd"));
        assert!(rule.is_satisfied_by_pair("", ""));
    }

    #[test]
    fn test_non_match_rule_ignores_partner() {
        let rule = rules::min_length(2);
        assert!(rule.is_satisfied_by_pair("ab", "zzzz"));
        assert!(!rule.is_satisfied_by_pair("a", "zzzz"));
    }
}
