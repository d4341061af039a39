//! Validator registry
//!
//! Rules are resolved by name at dispatch time. [`ValidatorRegistry::new`]
//! registers the nine built-in validators; applications add their own under
//! new names and reach them from schemas through [`Rule::named`].
//!
//! ```
//! use fform_forms::registry::{FieldValidator, RuleContext, ValidatorRegistry, Verdict};
//! use fform_forms::{Form, FormResult, Rule, Schema, SubmittedData};
//! use std::sync::Arc;
//!
//! struct NotAdmin;
//!
//! impl FieldValidator for NotAdmin {
//!     fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
//!         Ok(Verdict::check(ctx.text() != Some("admin"), "Reserved."))
//!     }
//! }
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register("not_admin", NotAdmin);
//!
//! let schema = Schema::builder()
//!     .field("user", [Rule::named("not_admin", serde_json::Value::Null)])
//!     .build()
//!     .unwrap();
//! let mut form = Form::builder(Arc::new(schema))
//!     .registry(Arc::new(registry))
//!     .bind(&SubmittedData::new().field("user", "admin"));
//!
//! assert!(!form.validate().unwrap());
//! assert_eq!(form.errors("user").unwrap(), ["Reserved."]);
//! ```

use crate::error::{FormError, FormResult};
use crate::rule::{Rule, RuleKind};
use crate::state::FormState;
use crate::value::FieldValue;
use fform_validators::{
	ChoiceValidator, EmailValidator, FileTypeValidator, LengthValidator, NumberValidator,
	RequiredValidator, ValidationError, Validator,
};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Outcome of one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
	Valid,
	/// Rejected, with the message to record (if any)
	Invalid(Option<String>),
}

impl Verdict {
	/// `Valid` when `ok`, otherwise `Invalid` carrying `message`.
	pub fn check(ok: bool, message: impl Into<String>) -> Self {
		if ok {
			Verdict::Valid
		} else {
			Verdict::Invalid(Some(message.into()))
		}
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, Verdict::Valid)
	}
}

/// Everything a validator may look at for one rule
pub struct RuleContext<'a> {
	pub form: &'a FormState,
	pub field: &'a str,
	pub value: &'a FieldValue,
	pub rule: &'a Rule,
}

impl RuleContext<'_> {
	/// Text of the validated value; `None` for file uploads.
	pub fn text(&self) -> Option<&str> {
		self.value.as_text()
	}

	/// The rule's override message, or `default`.
	pub fn message_or(&self, default: impl Into<String>) -> String {
		self.rule.message.clone().unwrap_or_else(|| default.into())
	}

	fn reject(&self, error: ValidationError) -> Verdict {
		Verdict::Invalid(Some(self.message_or(error.to_string())))
	}

	/// Runs a string validator; uploads never satisfy one.
	fn check_text<V: Validator<str> + ?Sized>(&self, validator: &V, on_file: ValidationError) -> Verdict {
		match self.text() {
			Some(text) => match validator.validate(text) {
				Ok(()) => Verdict::Valid,
				Err(error) => self.reject(error),
			},
			None => self.reject(on_file),
		}
	}

	fn mismatch(&self) -> FormError {
		FormError::RuleMismatch {
			validator: self.rule.validator_name().to_string(),
		}
	}
}

/// A named check the dispatcher can invoke
pub trait FieldValidator: Send + Sync {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict>;
}

/// Presence check; any upload counts as present
pub struct Required;

impl FieldValidator for Required {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		match ctx.value {
			FieldValue::File(_) => Ok(Verdict::Valid),
			FieldValue::Text(text) => Ok(match RequiredValidator::new().validate(text.as_str()) {
				Ok(()) => Verdict::Valid,
				Err(error) => ctx.reject(error),
			}),
		}
	}
}

pub struct RegexMatch;

impl FieldValidator for RegexMatch {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::Regex { pattern } = &ctx.rule.kind else {
			return Err(ctx.mismatch());
		};
		Ok(ctx.check_text(pattern.validator(), ValidationError::PatternMismatch))
	}
}

pub struct Email;

impl FieldValidator for Email {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		Ok(ctx.check_text(&EmailValidator::new(), ValidationError::InvalidEmail))
	}
}

/// Set membership (`in`)
pub struct OneOf;

impl FieldValidator for OneOf {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::In { choices } = &ctx.rule.kind else {
			return Err(ctx.mismatch());
		};
		let validator = ChoiceValidator::new(choices.iter().map(String::as_str));
		Ok(ctx.check_text(
			&validator,
			ValidationError::NotInChoices {
				value: String::new(),
			},
		))
	}
}

pub struct Number;

impl FieldValidator for Number {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::Number {
			min,
			max,
			min_message,
			max_message,
		} = &ctx.rule.kind
		else {
			return Err(ctx.mismatch());
		};
		let Some(text) = ctx.text() else {
			return Ok(ctx.reject(ValidationError::InvalidNumber));
		};
		match NumberValidator::with_range(*min, *max).validate(text) {
			Ok(()) => Ok(Verdict::Valid),
			Err(ValidationError::NumberOutOfRange { value, min, max }) => {
				let bound_message = if min.is_some_and(|min| value < min) {
					min_message
				} else {
					max_message
				};
				Ok(match bound_message {
					Some(message) => Verdict::Invalid(Some(message.clone())),
					None => ctx.reject(ValidationError::NumberOutOfRange { value, min, max }),
				})
			}
			Err(error) => Ok(ctx.reject(error)),
		}
	}
}

/// Character-length range
pub struct Length;

impl FieldValidator for Length {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::Length {
			min,
			max,
			min_message,
			max_message,
		} = &ctx.rule.kind
		else {
			return Err(ctx.mismatch());
		};
		let Some(text) = ctx.text() else {
			return Ok(ctx.reject(ValidationError::Custom(
				"Field length cannot be measured.".to_string(),
			)));
		};
		Ok(match LengthValidator::new(*min, *max).validate(text) {
			Ok(()) => Verdict::Valid,
			Err(error @ ValidationError::TooShort { .. }) => match min_message {
				Some(message) => Verdict::Invalid(Some(message.clone())),
				None => ctx.reject(error),
			},
			Err(error @ ValidationError::TooLong { .. }) => match max_message {
				Some(message) => Verdict::Invalid(Some(message.clone())),
				None => ctx.reject(error),
			},
			Err(error) => ctx.reject(error),
		})
	}
}

/// Exact equality with another field's value
pub struct Compare;

impl FieldValidator for Compare {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::Compare { other } = &ctx.rule.kind else {
			return Err(ctx.mismatch());
		};
		let other_value = ctx.form.get(other)?;
		Ok(if ctx.value == other_value {
			Verdict::Valid
		} else {
			ctx.reject(ValidationError::Mismatch {
				other: other.clone(),
			})
		})
	}
}

/// Upload MIME type whitelist
pub struct File;

impl FieldValidator for File {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::File { types } = &ctx.rule.kind else {
			return Err(ctx.mismatch());
		};
		let Some(upload) = ctx.value.as_file() else {
			return Ok(ctx.reject(ValidationError::UnsupportedFile { content_type: None }));
		};
		let validator = FileTypeValidator::with_mime_types(types.iter().map(String::as_str));
		Ok(match validator.validate(upload.content_type.as_str()) {
			Ok(()) => Verdict::Valid,
			Err(error) => ctx.reject(error),
		})
	}
}

/// In-process callback; records only a caller-supplied message
pub struct Custom;

impl FieldValidator for Custom {
	fn validate(&self, ctx: &RuleContext<'_>) -> FormResult<Verdict> {
		let RuleKind::Custom(check) = &ctx.rule.kind else {
			return Err(ctx.mismatch());
		};
		Ok(if check.call(ctx.field, ctx.form) {
			Verdict::Valid
		} else {
			Verdict::Invalid(ctx.rule.message.clone())
		})
	}
}

static SHARED: LazyLock<Arc<ValidatorRegistry>> =
	LazyLock::new(|| Arc::new(ValidatorRegistry::new()));

/// Name -> validator table consulted by the dispatcher
#[derive(Clone)]
pub struct ValidatorRegistry {
	validators: HashMap<String, Arc<dyn FieldValidator>>,
}

impl ValidatorRegistry {
	/// Registry holding the built-in validators.
	pub fn new() -> Self {
		let mut registry = Self::empty();
		registry.register("required", Required);
		registry.register("regex", RegexMatch);
		registry.register("email", Email);
		registry.register("in", OneOf);
		registry.register("number", Number);
		registry.register("length", Length);
		registry.register("compare", Compare);
		registry.register("file", File);
		registry.register("custom", Custom);
		registry
	}

	/// Registry with nothing registered.
	pub fn empty() -> Self {
		Self {
			validators: HashMap::new(),
		}
	}

	/// Process-wide registry of the built-ins, shared by default forms.
	pub fn shared() -> Arc<ValidatorRegistry> {
		Arc::clone(&SHARED)
	}

	/// Registers `validator` under `name`, replacing any previous entry.
	pub fn register(&mut self, name: impl Into<String>, validator: impl FieldValidator + 'static) {
		self.validators.insert(name.into(), Arc::new(validator));
	}

	pub fn get(&self, name: &str) -> Option<&Arc<dyn FieldValidator>> {
		self.validators.get(name)
	}

	/// Resolves `name`, failing with [`FormError::UnknownValidator`].
	pub fn resolve(&self, name: &str) -> FormResult<&Arc<dyn FieldValidator>> {
		self.get(name)
			.ok_or_else(|| FormError::UnknownValidator(name.to_string()))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.validators.contains_key(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.validators.keys().map(String::as_str)
	}
}

impl Default for ValidatorRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ValidatorRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut names: Vec<&str> = self.names().collect();
		names.sort_unstable();
		f.debug_struct("ValidatorRegistry")
			.field("validators", &names)
			.finish()
	}
}
