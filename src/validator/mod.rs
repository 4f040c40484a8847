//! Validation engine for formguard
//!
//! Evaluates values against compiled schemas in three modes: a single
//! value, a matching pair (password confirmation), or a whole form.
//! Failures are data on the returned reports, never errors; the engine is
//! deterministic and idempotent over its inputs.

mod engine;
mod report;

pub use engine::{validate_form, validate_pair, validate_value};
pub use report::{FieldReport, FormReport};
