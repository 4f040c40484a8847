//! Rule evaluation over compiled schemas
//!
//! Evaluation never short-circuits across rules: every violated rule
//! reports its message. The one exception is the required check, which
//! preempts the rule list entirely when a mandatory field is empty.

use std::collections::HashMap;

use tracing::trace;

use super::report::{FieldReport, FormReport};
use crate::rules::{self, Rule, RuleKind};
use crate::schema::Schema;

/// Validates a single value against a compiled schema.
///
/// A required field left empty fails with exactly the required message.
/// Otherwise every rule is evaluated in list order and all failing
/// messages are collected, each decorated with the schema's label.
pub fn validate_value(input: &str, schema: &Schema) -> FieldReport {
    if let Some(message) = schema.required() {
        if input.is_empty() {
            return FieldReport::invalid(vec![schema.decorate(message)]);
        }
    }

    let errors: Vec<String> = schema
        .rules()
        .iter()
        .filter(|rule| !rule.is_satisfied_by(input))
        .map(|rule| schema.decorate(rule.error()))
        .collect();

    trace!(violations = errors.len(), "validated value");
    if errors.is_empty() {
        FieldReport::valid()
    } else {
        FieldReport::invalid(errors)
    }
}

/// Validates a value against a match schema, given its partner's value.
///
/// The partner schema, when supplied, lets the default message name the
/// partner by label instead of raw property name (only when this schema is
/// labeled too, so the decorated message reads as one phrase).
pub fn validate_pair(
    input: &str,
    partner_value: &str,
    schema: &Schema,
    partner: Option<&Schema>,
) -> FieldReport {
    if let Some(message) = schema.required() {
        if input.is_empty() {
            return FieldReport::invalid(vec![schema.decorate(message)]);
        }
    }

    let errors: Vec<String> = schema
        .rules()
        .iter()
        .filter(|rule| !rule.is_satisfied_by_pair(input, partner_value))
        .map(|rule| schema.decorate(&pair_message(rule, schema, partner)))
        .collect();

    trace!(violations = errors.len(), "validated pair");
    if errors.is_empty() {
        FieldReport::valid()
    } else {
        FieldReport::invalid(errors)
    }
}

/// Validates a whole form: one value mapping against one schema mapping.
///
/// Properties are visited in sorted order so reports are deterministic.
/// Missing values are treated as empty strings; only failing properties
/// appear in the resulting error mapping.
pub fn validate_form(
    values: &HashMap<String, String>,
    schemas: &HashMap<String, Schema>,
) -> FormReport {
    let mut names: Vec<&String> = schemas.keys().collect();
    names.sort();

    let mut errors = HashMap::new();
    for name in names {
        let schema = &schemas[name];
        let value = values.get(name).map(String::as_str).unwrap_or("");

        let report = match schema.matching_property() {
            Some(property) => {
                let partner_value = values.get(property).map(String::as_str).unwrap_or("");
                validate_pair(value, partner_value, schema, schemas.get(property))
            }
            None => validate_value(value, schema),
        };

        if !report.is_valid() {
            errors.insert(name.clone(), report.into_errors());
        }
    }

    trace!(invalid_fields = errors.len(), "validated form");
    FormReport::new(errors)
}

/// Resolves a failing rule's message in pair mode.
///
/// A match rule still carrying its catalog default is rephrased against the
/// partner's label when both schemas are labeled; customized messages pass
/// through untouched.
fn pair_message(rule: &Rule, schema: &Schema, partner: Option<&Schema>) -> String {
    if rule.kind() == RuleKind::Match {
        if let (Some(property), Some(partner_label)) = (
            schema.matching_property(),
            partner.and_then(|p| p.label()),
        ) {
            if schema.label().is_some() && rule.error() == rules::equals(property).error() {
                return rules::equals(partner_label).error().to_string();
            }
        }
    }
    rule.error().to_string()
}
