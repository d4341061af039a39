//! Value validators for FForm
//!
//! This crate provides the form-agnostic predicates behind FForm's rule
//! catalog. Each validator checks a single value and reports a typed
//! [`ValidationError`] whose `Display` text is the default message shown to
//! the user.
//!
//! ```
//! use fform_validators::{EmailValidator, LengthValidator, Validator};
//!
//! assert!(EmailValidator::new().validate("jo@example.com").is_ok());
//!
//! let length = LengthValidator::between(3, 5);
//! let err = length.validate("ab").unwrap_err();
//! assert_eq!(err.to_string(), "Field length must be between 3 and 5.");
//! ```

pub mod email;
pub mod errors;
pub mod file_type;
pub mod numeric;
pub mod string;

pub use email::EmailValidator;
pub use errors::{ValidationError, ValidationResult};
pub use file_type::FileTypeValidator;
pub use numeric::{NumberValidator, is_numeric, parse_number};
pub use string::{ChoiceValidator, LengthValidator, RegexValidator, RequiredValidator};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::email::*;
	pub use crate::errors::*;
	pub use crate::file_type::*;
	pub use crate::numeric::*;
	pub use crate::string::*;
	pub use crate::Validator;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
