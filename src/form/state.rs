//! Form state: values, per-field errors, and the submit flow
//!
//! A `FormState` is a plain owned value with no internal locking; one owner
//! mutates it at a time, same as the builder.

use std::collections::HashMap;

use tracing::debug;

use crate::schema::Schema;
use crate::validator::{validate_form, validate_pair, validate_value};

/// Schema-driven state for one form.
pub struct FormState {
    schemas: HashMap<String, Schema>,
    initial: HashMap<String, String>,
    values: HashMap<String, String>,
    errors: HashMap<String, Vec<String>>,
    submit_error: Option<String>,
}

impl FormState {
    /// Creates form state over a schema mapping, starting from the given
    /// initial values. Fields without an initial value start empty.
    pub fn new(
        schemas: HashMap<String, Schema>,
        initial_values: Option<HashMap<String, String>>,
    ) -> Self {
        let initial = initial_values.unwrap_or_default();
        let values = schemas
            .keys()
            .map(|name| {
                let value = initial.get(name).cloned().unwrap_or_default();
                (name.clone(), value)
            })
            .collect();

        Self {
            schemas,
            initial,
            values,
            errors: HashMap::new(),
            submit_error: None,
        }
    }

    /// Returns the current value of a field.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns all current values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Returns the current errors for one field.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the error captured from the last submit callback, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Returns whether no field currently carries errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Stores a changed value and re-validates the affected fields: the
    /// field itself, the field it must match, and any field that must
    /// match it.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());

        self.revalidate(field);
        if let Some(partner) = self
            .schemas
            .get(field)
            .and_then(|s| s.matching_property())
            .map(str::to_string)
        {
            self.revalidate(&partner);
        }
        let dependents: Vec<String> = self
            .schemas
            .iter()
            .filter(|(_, schema)| schema.matching_property() == Some(field))
            .map(|(name, _)| name.clone())
            .collect();
        for dependent in dependents {
            self.revalidate(&dependent);
        }
    }

    /// Validates the whole form; when it passes, clears field errors and
    /// invokes the callback with the values, capturing a callback failure
    /// in the submit-error slot. Returns whether validation passed.
    pub fn submit<F>(&mut self, on_valid: F) -> bool
    where
        F: FnOnce(&HashMap<String, String>) -> Result<(), String>,
    {
        let report = validate_form(&self.values, &self.schemas);
        debug!(is_valid = report.is_valid(), "form submitted");

        if report.is_valid() {
            self.errors.clear();
            self.submit_error = on_valid(&self.values).err();
            true
        } else {
            self.errors = report.into_errors();
            false
        }
    }

    /// Restores initial values and clears all errors.
    pub fn reset(&mut self) {
        self.values = self
            .schemas
            .keys()
            .map(|name| {
                let value = self.initial.get(name).cloned().unwrap_or_default();
                (name.clone(), value)
            })
            .collect();
        self.errors.clear();
        self.submit_error = None;
    }

    fn revalidate(&mut self, field: &str) {
        let Some(schema) = self.schemas.get(field) else {
            return;
        };
        let value = self.values.get(field).map(String::as_str).unwrap_or("");

        let report = match schema.matching_property() {
            Some(property) => {
                let partner_value = self.values.get(property).map(String::as_str).unwrap_or("");
                validate_pair(value, partner_value, schema, self.schemas.get(property))
            }
            None => validate_value(value, schema),
        };

        if report.is_valid() {
            self.errors.remove(field);
        } else {
            self.errors.insert(field.to_string(), report.into_errors());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;

    fn signup_schemas() -> HashMap<String, Schema> {
        let mut schemas = HashMap::new();
        schemas.insert(
            "email".to_string(),
            SchemaBuilder::new()
                .is_email(None)
                .is_required(None)
                .compile()
                .unwrap(),
        );
        schemas.insert(
            "password".to_string(),
            SchemaBuilder::new()
                .min(8, None)
                .has_digit(None)
                .compile()
                .unwrap(),
        );
        schemas.insert(
            "confirm".to_string(),
            SchemaBuilder::new().matches("password", None).compile().unwrap(),
        );
        schemas
    }

    #[test]
    fn test_fields_start_from_initial_values() {
        let mut initial = HashMap::new();
        initial.insert("email".to_string(), "a@b.io".to_string());

        let form = FormState::new(signup_schemas(), Some(initial));
        assert_eq!(form.value("email"), "a@b.io");
        assert_eq!(form.value("password"), "");
        assert!(form.is_valid());
    }

    #[test]
    fn test_change_revalidates_single_field() {
        let mut form = FormState::new(signup_schemas(), None);

        form.set_value("email", "nope");
        assert_eq!(form.field_errors("email").len(), 1);

        form.set_value("email", "a@b.io");
        assert!(form.field_errors("email").is_empty());
    }

    #[test]
    fn test_change_revalidates_match_partner() {
        let mut form = FormState::new(signup_schemas(), None);

        form.set_value("password", "secret12");
        form.set_value("confirm", "secret12");
        assert!(form.field_errors("confirm").is_empty());

        // Changing the source field re-checks the dependent field.
        form.set_value("password", "changed99");
        assert_eq!(form.field_errors("confirm").len(), 1);
    }

    #[test]
    fn test_submit_blocks_on_invalid_form() {
        let mut form = FormState::new(signup_schemas(), None);
        let mut called = false;

        let ok = form.submit(|_| {
            called = true;
            Ok(())
        });

        assert!(!ok);
        assert!(!called);
        assert!(!form.field_errors("email").is_empty());
    }

    #[test]
    fn test_submit_invokes_callback_when_valid() {
        let mut form = FormState::new(signup_schemas(), None);
        form.set_value("email", "a@b.io");
        form.set_value("password", "secret12");
        form.set_value("confirm", "secret12");

        let mut seen = None;
        let ok = form.submit(|values| {
            seen = Some(values.get("email").cloned());
            Ok(())
        });

        assert!(ok);
        assert_eq!(seen, Some(Some("a@b.io".to_string())));
        assert!(form.submit_error().is_none());
    }

    #[test]
    fn test_submit_captures_callback_failure() {
        let mut form = FormState::new(signup_schemas(), None);
        form.set_value("email", "a@b.io");
        form.set_value("password", "secret12");
        form.set_value("confirm", "secret12");

        let ok = form.submit(|_| Err("server rejected".to_string()));

        assert!(ok);
        assert_eq!(form.submit_error(), Some("server rejected"));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut initial = HashMap::new();
        initial.insert("email".to_string(), "a@b.io".to_string());

        let mut form = FormState::new(signup_schemas(), Some(initial));
        form.set_value("email", "broken");
        let _ = form.submit(|_| Err("boom".to_string()));

        form.reset();
        assert_eq!(form.value("email"), "a@b.io");
        assert!(form.is_valid());
        assert!(form.submit_error().is_none());
    }
}
