//! Rule catalog for formguard
//!
//! One pure factory per rule kind: character-class presence (digit, symbol,
//! uppercase, lowercase), email shape, parameterized length bounds, and the
//! binary property-match rule. Factories construct fresh descriptors; the
//! fixed regexes behind them are compiled once.

mod catalog;
mod types;

pub use catalog::{
    digit, email, equals, lowercase, max_length, min_length, required_error, symbol, uppercase,
};
pub use types::{Check, Rule, RuleKind};
