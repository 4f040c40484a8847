//! Compiled schema
//!
//! The finalized form of a builder: label, required flag, optional matching
//! property, and the ordered rule list. Immutable after compilation.

use crate::rules::Rule;

/// A compiled field schema.
///
/// Constructed only by [`SchemaBuilder::compile`](super::SchemaBuilder::compile).
/// Cloning is cheap enough for schema maps shared across a form.
#[derive(Debug, Clone)]
pub struct Schema {
    label: Option<String>,
    required: Option<String>,
    matching_property: Option<String>,
    rules: Vec<Rule>,
}

impl Schema {
    pub(crate) fn new(
        label: Option<String>,
        required: Option<String>,
        matching_property: Option<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            label,
            required,
            matching_property,
            rules,
        }
    }

    /// Returns the display label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the required-field message when the field is mandatory.
    pub fn required(&self) -> Option<&str> {
        self.required.as_deref()
    }

    /// Returns the sibling property this field must equal, if any.
    pub fn matching_property(&self) -> Option<&str> {
        self.matching_property.as_deref()
    }

    /// Returns the compiled rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Prefixes a failure message with the schema's label when present.
    pub(crate) fn decorate(&self, message: &str) -> String {
        match &self.label {
            Some(label) => format!("{} {}", label, message),
            None => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_with_label() {
        let schema = Schema::new(Some("Password".into()), None, None, Vec::new());
        assert_eq!(schema.decorate("is required"), "Password is required");
    }

    #[test]
    fn test_decorate_without_label() {
        let schema = Schema::new(None, None, None, Vec::new());
        assert_eq!(schema.decorate("is required"), "is required");
    }
}
