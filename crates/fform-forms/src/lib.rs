//! Declarative form validation for FForm
//!
//! This crate provides:
//! - Schemas mapping field names to ordered rule lists, built in code or
//!   loaded from JSON/TOML
//! - A per-request field store holding submitted values and error messages
//! - A name-keyed validator registry with the built-in rule catalog
//! - HTML `<input>` rendering pre-filled from submitted values
//!
//! ```
//! use fform_forms::{Form, Schema, SubmittedData};
//!
//! let schema = Schema::from_json_str(
//!     r#"{
//!         "password": [{"rule": "length", "min": 8}],
//!         "confirm": [{"rule": "compare", "other": "password"}]
//!     }"#,
//! )
//! .unwrap();
//! let data = SubmittedData::new()
//!     .field("password", "hunter2")
//!     .field("confirm", "hunter22");
//!
//! let mut form = Form::new(schema, &data);
//! assert!(!form.validate().unwrap());
//! assert_eq!(form.errors("password").unwrap(), ["Field length must be at least 8."]);
//! assert_eq!(form.errors("confirm").unwrap(), ["Field not matching password."]);
//! ```

pub mod error;
pub mod form;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod settings;
pub mod state;
pub mod value;
pub mod widgets;

pub use error::{FormError, FormResult};
pub use form::{Form, FormBuilder};
pub use registry::{FieldValidator, RuleContext, ValidatorRegistry, Verdict};
pub use rule::{CustomArgs, CustomCheck, Pattern, Rule, RuleKind};
pub use schema::{Schema, SchemaBuilder};
pub use settings::{FormSettings, SettingsError};
pub use state::{FieldEntry, FormState};
pub use value::{FieldValue, SubmittedData, UploadedFile};
pub use widgets::{Widgets, html_params, render_input};
