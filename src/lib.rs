//! formguard - Declarative field validation for web forms
//!
//! Schemas are declared fluently, compiled once into an ordered rule list,
//! and evaluated against single values, matching pairs, or whole forms.
//!
//! ```
//! use formguard::schema::SchemaBuilder;
//! use formguard::validator::validate_value;
//!
//! let password = SchemaBuilder::new()
//!     .label("Password")
//!     .min(8, None)
//!     .has_digit(None)
//!     .has_symbol(None)
//!     .compile()
//!     .unwrap();
//!
//! let report = validate_value("hunter2", &password);
//! assert!(!report.is_valid());
//! ```

pub mod form;
pub mod rules;
pub mod schema;
pub mod validator;

pub use form::FormState;
pub use schema::{Schema, SchemaBuilder, SchemaError, SchemaResult};
pub use validator::{validate_form, validate_pair, validate_value, FieldReport, FormReport};
