//! Fluent schema builder and compiler
//!
//! The builder accumulates constraints by value: every setter consumes and
//! returns the builder, and `compile` consumes it for good. Bad arguments
//! (empty label, empty matching property) are recorded when the offending
//! call happens and surface as the compile result, so chains stay fluent.

use tracing::debug;

use super::compiled::Schema;
use super::errors::{SchemaError, SchemaResult};
use crate::rules::{self, Rule};

/// A length bound plus its optional custom message.
#[derive(Debug, Clone)]
struct Bound {
    value: usize,
    error: Option<String>,
}

/// One character-class rule slot.
#[derive(Debug, Clone, Default)]
struct ClassSlot {
    enabled: bool,
    error: Option<String>,
}

impl ClassSlot {
    fn on(error: Option<&str>) -> Self {
        Self {
            enabled: true,
            error: error.map(str::to_string),
        }
    }
}

/// Declared equality with a sibling field.
#[derive(Debug, Clone)]
struct MatchSpec {
    property: String,
    error: Option<String>,
}

/// Fluent builder for a single field's validation schema.
///
/// Each rule kind is unique: re-invoking a setter overwrites that kind.
/// A builder is a plain owned value; sharing one across call sites is the
/// caller's problem (single owner at a time, no internal locking).
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    label: Option<String>,
    required: Option<String>,
    minimum: Option<Bound>,
    maximum: Option<Bound>,
    digit: ClassSlot,
    symbol: ClassSlot,
    uppercase: ClassSlot,
    lowercase: ClassSlot,
    email: ClassSlot,
    matching: Option<MatchSpec>,
    defect: Option<SchemaError>,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum character count, overwriting any prior minimum.
    pub fn min(mut self, n: usize, error: Option<&str>) -> Self {
        self.minimum = Some(Bound {
            value: n,
            error: error.map(str::to_string),
        });
        self
    }

    /// Sets the maximum character count, overwriting any prior maximum.
    pub fn max(mut self, n: usize, error: Option<&str>) -> Self {
        self.maximum = Some(Bound {
            value: n,
            error: error.map(str::to_string),
        });
        self
    }

    /// Requires at least one digit.
    pub fn has_digit(mut self, error: Option<&str>) -> Self {
        self.digit = ClassSlot::on(error);
        self
    }

    /// Requires at least one symbol.
    pub fn has_symbol(mut self, error: Option<&str>) -> Self {
        self.symbol = ClassSlot::on(error);
        self
    }

    /// Requires at least one uppercase letter.
    pub fn has_uppercase(mut self, error: Option<&str>) -> Self {
        self.uppercase = ClassSlot::on(error);
        self
    }

    /// Requires at least one lowercase letter.
    pub fn has_lowercase(mut self, error: Option<&str>) -> Self {
        self.lowercase = ClassSlot::on(error);
        self
    }

    /// Requires the email shape. Exclusive with length and character-class
    /// rules; the conflict is resolved at compile time, not here.
    pub fn is_email(mut self, error: Option<&str>) -> Self {
        self.email = ClassSlot::on(error);
        self
    }

    /// Marks the field mandatory.
    pub fn is_required(mut self, error: Option<&str>) -> Self {
        self.required = Some(error.unwrap_or_else(|| rules::required_error()).to_string());
        self
    }

    /// Requires equality with the named sibling field. Exclusive with every
    /// other rule kind; the conflict is resolved at compile time.
    pub fn matches(mut self, property: &str, error: Option<&str>) -> Self {
        if property.is_empty() {
            self.record_defect(SchemaError::EmptyMatchingProperty);
            return self;
        }
        self.matching = Some(MatchSpec {
            property: property.to_string(),
            error: error.map(str::to_string),
        });
        self
    }

    /// Sets the display label prefixed to failure messages.
    pub fn label(mut self, name: &str) -> Self {
        if name.is_empty() {
            self.record_defect(SchemaError::EmptyLabel);
            return self;
        }
        self.label = Some(name.to_string());
        self
    }

    // Read-only accessors mirroring the setters.

    /// Returns the declared minimum, if set.
    pub fn minimum(&self) -> Option<usize> {
        self.minimum.as_ref().map(|b| b.value)
    }

    /// Returns the declared maximum, if set.
    pub fn maximum(&self) -> Option<usize> {
        self.maximum.as_ref().map(|b| b.value)
    }

    /// Returns whether the digit rule is enabled.
    pub fn digit(&self) -> bool {
        self.digit.enabled
    }

    /// Returns whether the symbol rule is enabled.
    pub fn symbol(&self) -> bool {
        self.symbol.enabled
    }

    /// Returns whether the uppercase rule is enabled.
    pub fn uppercase(&self) -> bool {
        self.uppercase.enabled
    }

    /// Returns whether the lowercase rule is enabled.
    pub fn lowercase(&self) -> bool {
        self.lowercase.enabled
    }

    /// Returns whether the email rule is enabled.
    pub fn email(&self) -> bool {
        self.email.enabled
    }

    /// Returns whether the field is marked required.
    pub fn required(&self) -> bool {
        self.required.is_some()
    }

    /// Returns the display label, if set.
    pub fn alias(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the declared matching property, if set.
    pub fn matching_property(&self) -> Option<&str> {
        self.matching.as_ref().map(|m| m.property.as_str())
    }

    /// Finalizes the builder into an immutable [`Schema`].
    ///
    /// Resolves the derived minimum, checks cross-rule invariants, and
    /// selects the exclusive rule family (match, then email) when declared.
    ///
    /// # Errors
    ///
    /// Returns the first recorded construction error, or a compilation
    /// error when `minimum > maximum` or a bound cannot fit the enabled
    /// character classes.
    pub fn compile(self) -> SchemaResult<Schema> {
        if let Some(defect) = self.defect {
            return Err(defect);
        }

        // Match is exclusive: everything but label and required is dropped.
        if let Some(matching) = self.matching {
            let rule = apply_custom(rules::equals(&matching.property), matching.error);
            debug!(property = %matching.property, "compiled match schema");
            return Ok(Schema::new(
                self.label,
                self.required,
                Some(matching.property),
                vec![rule],
            ));
        }

        // Email is exclusive, second priority.
        if self.email.enabled {
            let rule = apply_custom(rules::email(), self.email.error);
            debug!("compiled email schema");
            return Ok(Schema::new(self.label, self.required, None, vec![rule]));
        }

        let classes: [(&ClassSlot, fn() -> Rule); 4] = [
            (&self.digit, rules::digit),
            (&self.symbol, rules::symbol),
            (&self.uppercase, rules::uppercase),
            (&self.lowercase, rules::lowercase),
        ];
        let class_count = classes.iter().filter(|(slot, _)| slot.enabled).count();

        // An unset minimum derives from the character-class count.
        let minimum = self.minimum.unwrap_or(Bound {
            value: class_count,
            error: None,
        });

        if let Some(maximum) = &self.maximum {
            if minimum.value > maximum.value {
                return Err(SchemaError::BoundsConflict {
                    minimum: minimum.value,
                    maximum: maximum.value,
                });
            }
            if maximum.value < class_count {
                return Err(SchemaError::BoundBelowCharacterClasses {
                    bound: "maximum",
                    value: maximum.value,
                    classes: class_count,
                });
            }
        }
        if minimum.value < class_count {
            return Err(SchemaError::BoundBelowCharacterClasses {
                bound: "minimum",
                value: minimum.value,
                classes: class_count,
            });
        }

        let mut list = Vec::with_capacity(2 + class_count);
        list.push(apply_custom(rules::min_length(minimum.value), minimum.error));
        if let Some(maximum) = self.maximum {
            list.push(apply_custom(rules::max_length(maximum.value), maximum.error));
        }
        for (slot, factory) in classes {
            if slot.enabled {
                list.push(apply_custom(factory(), slot.error.clone()));
            }
        }

        debug!(
            rule_count = list.len(),
            minimum = minimum.value,
            "compiled field schema"
        );
        Ok(Schema::new(self.label, self.required, None, list))
    }

    fn record_defect(&mut self, error: SchemaError) {
        // First bad call wins; later calls cannot mask it.
        if self.defect.is_none() {
            self.defect = Some(error);
        }
    }
}

fn apply_custom(rule: Rule, custom: Option<String>) -> Rule {
    match custom {
        Some(error) => rule.with_error(error),
        None => rule,
    }
}
