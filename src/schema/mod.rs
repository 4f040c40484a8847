//! Field schema subsystem for formguard
//!
//! A [`SchemaBuilder`] accumulates constraints fluently and compiles once
//! into an immutable [`Schema`] holding the ordered rule list the validator
//! evaluates.
//!
//! # Design Principles
//!
//! - Compilation is a one-shot finalize (the builder is consumed)
//! - Rule kinds are unique; re-declaring one overwrites it
//! - Match and email rules are exclusive, resolved at compile time
//! - An unset minimum derives from the required character-class count
//! - Misconfiguration surfaces as `Err` from compile, never as a panic

mod builder;
mod compiled;
mod errors;

pub use builder::SchemaBuilder;
pub use compiled::Schema;
pub use errors::{SchemaError, SchemaResult};
