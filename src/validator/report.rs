//! Validation reports
//!
//! The only validation outcome that reaches end users. Reports serialize to
//! JSON so UI layers can render them directly.

use std::collections::HashMap;

use serde::Serialize;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    is_valid: bool,
    errors: Vec<String>,
}

impl FieldReport {
    /// A passing report.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing report carrying every violated rule's message.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Returns whether the field passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the failure messages in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the report, yielding the failure messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Outcome of validating a whole form, keyed by property name.
///
/// Only failing properties appear in the error mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    is_valid: bool,
    errors: HashMap<String, Vec<String>>,
}

impl FormReport {
    pub(crate) fn new(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the per-property failure messages.
    pub fn errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }

    /// Returns the failure messages for one property.
    pub fn field_errors(&self, property: &str) -> &[String] {
        self.errors.get(property).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Consumes the report, yielding the error mapping.
    pub fn into_errors(self) -> HashMap<String, Vec<String>> {
        self.errors
    }
}
