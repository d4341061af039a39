//! Validation rules
//!
//! A [`Rule`] pairs a typed [`RuleKind`] with the options every rule shares:
//! an override message and the `allow_empty` switch. Argument shapes are
//! checked when the rule is built or deserialized, not when it runs.
//!
//! Rules deserialize from objects tagged by `rule`:
//!
//! ```
//! use fform_forms::{Rule, RuleKind};
//!
//! let rule: Rule = serde_json::from_str(
//!     r#"{"rule": "length", "min": 3, "max": 5, "message": "3 to 5 please."}"#,
//! )
//! .unwrap();
//! assert_eq!(rule.validator_name(), "length");
//! assert_eq!(rule.message.as_deref(), Some("3 to 5 please."));
//! assert!(matches!(rule.kind, RuleKind::Length { min: Some(3), max: Some(5), .. }));
//! ```

use crate::error::{FormError, FormResult};
use crate::state::FormState;
use crate::value::FieldValue;
use fform_validators::RegexValidator;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// One validator invocation attached to a field
///
/// Deserializing rejects keys the selected rule does not take, so a
/// misspelled argument fails the schema instead of being ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Rule {
	pub kind: RuleKind,
	/// Replaces the validator's default message
	pub message: Option<String>,
	/// Skip this rule when the field's value is empty
	pub allow_empty: bool,
}

/// Keys every rule accepts besides its own arguments
const SHARED_KEYS: &[&str] = &["rule", "message", "allow_empty"];

#[derive(Deserialize)]
struct RuleRepr {
	#[serde(flatten)]
	kind: RuleKind,
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	allow_empty: bool,
}

impl TryFrom<Map<String, Value>> for Rule {
	type Error = String;

	fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
		if let Some(Value::String(tag)) = raw.get("rule")
			&& let Some(arguments) = RuleKind::argument_keys(tag)
			&& let Some(unknown) = raw
				.keys()
				.find(|key| !SHARED_KEYS.contains(&key.as_str()) && !arguments.contains(&key.as_str()))
		{
			return Err(format!("unknown argument `{unknown}` for rule `{tag}`"));
		}
		let repr: RuleRepr = serde_json::from_value(Value::Object(raw)).map_err(|e| e.to_string())?;
		Ok(Self {
			kind: repr.kind,
			message: repr.message,
			allow_empty: repr.allow_empty,
		})
	}
}

/// Validator selection and its typed arguments
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleKind {
	Required,
	Regex {
		pattern: Pattern,
	},
	Email,
	In {
		choices: Vec<String>,
	},
	Number {
		#[serde(default)]
		min: Option<f64>,
		#[serde(default)]
		max: Option<f64>,
		#[serde(default)]
		min_message: Option<String>,
		#[serde(default)]
		max_message: Option<String>,
	},
	Length {
		#[serde(default)]
		min: Option<usize>,
		#[serde(default)]
		max: Option<usize>,
		#[serde(default)]
		min_message: Option<String>,
		#[serde(default)]
		max_message: Option<String>,
	},
	Compare {
		other: String,
	},
	File {
		types: Vec<String>,
	},
	#[serde(skip)]
	Custom(CustomCheck),
	/// Dispatches to an application validator registered under `validator`
	Named {
		validator: String,
		#[serde(default)]
		params: Value,
	},
}

impl Rule {
	fn from_kind(kind: RuleKind) -> Self {
		Self {
			kind,
			message: None,
			allow_empty: false,
		}
	}

	/// Fails on the empty string.
	pub fn required() -> Self {
		Self::from_kind(RuleKind::Required)
	}

	/// Fails unless the value matches `pattern` (case-insensitive).
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::{FormError, Rule};
	///
	/// assert!(Rule::regex(r"^\d{4}$").is_ok());
	/// assert!(matches!(Rule::regex("(unclosed"), Err(FormError::InvalidPattern { .. })));
	/// ```
	pub fn regex(pattern: &str) -> FormResult<Self> {
		Ok(Self::from_kind(RuleKind::Regex {
			pattern: Pattern::new(pattern)?,
		}))
	}

	/// Fails unless the value looks like an e-mail address.
	pub fn email() -> Self {
		Self::from_kind(RuleKind::Email)
	}

	/// Fails unless the value is one of `choices`.
	pub fn one_of<I, S>(choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::from_kind(RuleKind::In {
			choices: choices.into_iter().map(Into::into).collect(),
		})
	}

	/// Fails unless the value is numeric.
	pub fn number() -> Self {
		Self::number_range(None, None)
	}

	/// Fails unless the value is numeric and within the inclusive bounds.
	pub fn number_range(min: Option<f64>, max: Option<f64>) -> Self {
		Self::from_kind(RuleKind::Number {
			min,
			max,
			min_message: None,
			max_message: None,
		})
	}

	/// Fails unless `min <= chars(value) <= max`; either bound may be absent.
	pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
		Self::from_kind(RuleKind::Length {
			min,
			max,
			min_message: None,
			max_message: None,
		})
	}

	pub fn length_between(min: usize, max: usize) -> Self {
		Self::length(Some(min), Some(max))
	}

	/// Fails unless the value equals the value of field `other`.
	pub fn compare(other: impl Into<String>) -> Self {
		Self::from_kind(RuleKind::Compare {
			other: other.into(),
		})
	}

	/// Fails unless the value is an upload whose MIME type is in `types`.
	pub fn file<I, S>(types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::from_kind(RuleKind::File {
			types: types.into_iter().map(Into::into).collect(),
		})
	}

	/// Fails when `callback` returns `false`.
	///
	/// A custom rule has no default message: without [`Rule::with_message`]
	/// a failure invalidates the form but records nothing on the field.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::Rule;
	///
	/// let rule = Rule::custom(|_field, args| {
	///     args.text("username").is_some_and(|name| name != "root")
	/// })
	/// .with_message("Reserved name.");
	/// assert_eq!(rule.validator_name(), "custom");
	/// ```
	pub fn custom<F>(callback: F) -> Self
	where
		F: Fn(&str, &CustomArgs<'_>) -> bool + Send + Sync + 'static,
	{
		Self::custom_with_args(callback, Map::new())
	}

	/// Like [`Rule::custom`], passing `args` through to the callback.
	pub fn custom_with_args<F>(callback: F, args: Map<String, Value>) -> Self
	where
		F: Fn(&str, &CustomArgs<'_>) -> bool + Send + Sync + 'static,
	{
		Self::from_kind(RuleKind::Custom(CustomCheck {
			callback: Arc::new(callback),
			args,
		}))
	}

	/// Dispatches to a validator registered under `validator`.
	pub fn named(validator: impl Into<String>, params: Value) -> Self {
		Self::from_kind(RuleKind::Named {
			validator: validator.into(),
			params,
		})
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn allow_empty(mut self) -> Self {
		self.allow_empty = true;
		self
	}

	/// Sets distinct messages for the lower and upper bound.
	///
	/// Only `length` and `number` rules have bounds; other rules are returned
	/// unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::{Rule, RuleKind};
	///
	/// let rule = Rule::length(Some(8), Some(64)).with_bound_messages("Too short.", "Too long.");
	/// assert!(matches!(
	///     rule.kind,
	///     RuleKind::Length { min_message: Some(_), max_message: Some(_), .. }
	/// ));
	/// ```
	pub fn with_bound_messages(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
		match &mut self.kind {
			RuleKind::Length {
				min_message,
				max_message,
				..
			}
			| RuleKind::Number {
				min_message,
				max_message,
				..
			} => {
				*min_message = Some(min.into());
				*max_message = Some(max.into());
			}
			_ => {}
		}
		self
	}

	/// Name the registry resolves this rule by.
	pub fn validator_name(&self) -> &str {
		self.kind.validator_name()
	}

	/// Checks the rule's arguments against the fields of its schema.
	pub(crate) fn check_declaration<'a>(
		&self,
		field: &str,
		mut declared: impl Iterator<Item = &'a str>,
	) -> FormResult<()> {
		let invalid = |reason: String| FormError::InvalidRule {
			field: field.to_string(),
			reason,
		};
		match &self.kind {
			RuleKind::Compare { other } => {
				if !declared.any(|name| name == other) {
					return Err(FormError::UnknownField(other.clone()));
				}
			}
			RuleKind::Length {
				min: Some(min),
				max: Some(max),
				..
			} if min > max => {
				return Err(invalid(format!("length min {min} exceeds max {max}")));
			}
			RuleKind::Number { min, max, .. } => {
				if min.is_some_and(f64::is_nan) || max.is_some_and(f64::is_nan) {
					return Err(invalid("number bounds must not be NaN".to_string()));
				}
				if let (Some(min), Some(max)) = (min, max)
					&& min > max
				{
					return Err(invalid(format!("number min {min} exceeds max {max}")));
				}
			}
			RuleKind::Named { validator, .. } if validator.is_empty() => {
				return Err(invalid("named rule without a validator name".to_string()));
			}
			_ => {}
		}
		Ok(())
	}
}

impl RuleKind {
	/// Argument keys a serialized rule tagged `tag` may carry.
	fn argument_keys(tag: &str) -> Option<&'static [&'static str]> {
		let keys: &'static [&'static str] = match tag {
			"required" | "email" => &[],
			"regex" => &["pattern"],
			"in" => &["choices"],
			"number" | "length" => &["min", "max", "min_message", "max_message"],
			"compare" => &["other"],
			"file" => &["types"],
			"named" => &["validator", "params"],
			_ => return None,
		};
		Some(keys)
	}

	pub fn validator_name(&self) -> &str {
		match self {
			RuleKind::Required => "required",
			RuleKind::Regex { .. } => "regex",
			RuleKind::Email => "email",
			RuleKind::In { .. } => "in",
			RuleKind::Number { .. } => "number",
			RuleKind::Length { .. } => "length",
			RuleKind::Compare { .. } => "compare",
			RuleKind::File { .. } => "file",
			RuleKind::Custom(_) => "custom",
			RuleKind::Named { validator, .. } => validator,
		}
	}
}

/// A regex compiled when the rule is declared
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Pattern {
	source: String,
	validator: RegexValidator,
}

impl Pattern {
	pub fn new(source: &str) -> FormResult<Self> {
		let validator = RegexValidator::new(source).map_err(|source_err| FormError::InvalidPattern {
			pattern: source.to_string(),
			source: source_err,
		})?;
		Ok(Self {
			source: source.to_string(),
			validator,
		})
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub(crate) fn validator(&self) -> &RegexValidator {
		&self.validator
	}
}

impl TryFrom<String> for Pattern {
	type Error = FormError;

	fn try_from(source: String) -> Result<Self, Self::Error> {
		Pattern::new(&source)
	}
}

type CustomCallback = dyn Fn(&str, &CustomArgs<'_>) -> bool + Send + Sync;

/// An in-process callback with its extra arguments
#[derive(Clone)]
pub struct CustomCheck {
	callback: Arc<CustomCallback>,
	args: Map<String, Value>,
}

impl CustomCheck {
	pub(crate) fn call(&self, field: &str, form: &FormState) -> bool {
		let args = CustomArgs {
			form,
			args: &self.args,
		};
		(self.callback)(field, &args)
	}

	pub fn args(&self) -> &Map<String, Value> {
		&self.args
	}
}

impl fmt::Debug for CustomCheck {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CustomCheck")
			.field("args", &self.args)
			.finish_non_exhaustive()
	}
}

/// What a custom callback sees: its own arguments and the whole form.
pub struct CustomArgs<'a> {
	pub form: &'a FormState,
	pub args: &'a Map<String, Value>,
}

impl CustomArgs<'_> {
	/// Looks up one of the rule's extra arguments.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.args.get(key)
	}

	/// Stored value of another field.
	pub fn value(&self, field: &str) -> FormResult<&FieldValue> {
		self.form.get(field)
	}

	/// Stored text of another field; `None` for unknown fields and uploads.
	pub fn text(&self, field: &str) -> Option<&str> {
		self.form.get(field).ok().and_then(FieldValue::as_text)
	}
}
