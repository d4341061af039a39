//! # FForm
//!
//! Declarative form validation for Rust.
//!
//! A [`Schema`](forms::Schema) maps field names to ordered rule lists. Binding
//! it to a submission gives a [`Form`](forms::Form) whose `validate()` runs
//! every rule and records per-field error messages; the same form renders
//! `<input>` elements pre-filled with what the user sent.
//!
//! ## Feature Flags
//!
//! - `validators` - Value validators only (`fform-validators`)
//! - `forms` - Schemas, dispatcher, settings and widgets (`fform-forms`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```
//! use fform::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("email", [Rule::required(), Rule::email()])
//!     .field("age", [Rule::number()])
//!     .build()
//!     .unwrap();
//! let data = SubmittedData::new().field("email", "").field("age", "xx");
//!
//! let mut form = Form::new(schema, &data);
//! assert!(!form.validate().unwrap());
//! assert_eq!(form.errors("age").unwrap(), ["Invalid number."]);
//! assert_eq!(
//!     form.widgets().input("age", &[]),
//!     r#"<input type="text" value="xx" name="age" id="age" />"#
//! );
//! ```

#[cfg(feature = "validators")]
pub use fform_validators as validators;

#[cfg(feature = "forms")]
pub use fform_forms as forms;

#[cfg(feature = "validators")]
pub use fform_validators::{ValidationError, ValidationResult, Validator};

#[cfg(feature = "forms")]
pub use fform_forms::{Form, FormError, FormResult, Rule, Schema, SubmittedData};

/// Re-export commonly used types
pub mod prelude {
	#[cfg(feature = "validators")]
	pub use fform_validators::{
		ChoiceValidator, EmailValidator, FileTypeValidator, LengthValidator, NumberValidator,
		RegexValidator, RequiredValidator, ValidationError, ValidationResult, Validator,
	};

	#[cfg(feature = "forms")]
	pub use fform_forms::{
		FieldValidator, FieldValue, Form, FormBuilder, FormError, FormResult, FormSettings,
		FormState, Rule, RuleContext, RuleKind, Schema, SubmittedData, UploadedFile,
		ValidatorRegistry, Verdict, Widgets,
	};
}
