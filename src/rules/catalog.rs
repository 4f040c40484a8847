//! Fixed rule factories and default messages
//!
//! Every factory returns a fresh [`Rule`]; the regexes behind the fixed
//! kinds are compiled once and cloned into each descriptor (a `Regex` clone
//! is a cheap handle, not a recompile).

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{Check, Rule, RuleKind};

lazy_static! {
    static ref DIGIT_PATTERN: Regex = Regex::new(r"[0-9]").expect("hardcoded pattern");
    static ref SYMBOL_PATTERN: Regex = Regex::new(r"[^a-zA-Z0-9\s]").expect("hardcoded pattern");
    static ref UPPERCASE_PATTERN: Regex = Regex::new(r"[A-Z]").expect("hardcoded pattern");
    static ref LOWERCASE_PATTERN: Regex = Regex::new(r"[a-z]").expect("hardcoded pattern");
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded pattern");
}

/// At least one digit.
pub fn digit() -> Rule {
    Rule::new(
        RuleKind::Digit,
        Check::Pattern(DIGIT_PATTERN.clone()),
        "must contain at least one digit",
    )
}

/// At least one symbol (anything outside alphanumerics and whitespace).
pub fn symbol() -> Rule {
    Rule::new(
        RuleKind::Symbol,
        Check::Pattern(SYMBOL_PATTERN.clone()),
        "must contain at least one symbol",
    )
}

/// At least one uppercase letter.
pub fn uppercase() -> Rule {
    Rule::new(
        RuleKind::Uppercase,
        Check::Pattern(UPPERCASE_PATTERN.clone()),
        "must contain at least one uppercase letter",
    )
}

/// At least one lowercase letter.
pub fn lowercase() -> Rule {
    Rule::new(
        RuleKind::Lowercase,
        Check::Pattern(LOWERCASE_PATTERN.clone()),
        "must contain at least one lowercase letter",
    )
}

/// Simple `local@domain.tld` email shape.
pub fn email() -> Rule {
    Rule::new(
        RuleKind::Email,
        Check::Pattern(EMAIL_PATTERN.clone()),
        "must be a valid email address",
    )
}

/// Character count at least `n`.
pub fn min_length(n: usize) -> Rule {
    Rule::new(
        RuleKind::Minimum,
        Check::MinLength(n),
        format!("must be at least {} characters long", n),
    )
}

/// Character count at most `n`.
pub fn max_length(n: usize) -> Rule {
    Rule::new(
        RuleKind::Maximum,
        Check::MaxLength(n),
        format!("must be at most {} characters long", n),
    )
}

/// Equality with the named sibling field.
pub fn equals(property: &str) -> Rule {
    Rule::new(
        RuleKind::Match,
        Check::Equals,
        format!("must match {}", property),
    )
}

/// Default message for a required field left empty.
pub fn required_error() -> &'static str {
    "is required"
}
