//! Error types for schema and configuration mistakes
//!
//! User-input problems never surface here: they are recorded as messages on
//! the failing field. A `FormError` always means the form was declared or
//! configured incorrectly.

use crate::settings::SettingsError;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),

	#[error("Unknown validator: {0}")]
	UnknownValidator(String),

	#[error("Invalid rule on field {field}: {reason}")]
	InvalidRule { field: String, reason: String },

	#[error("Invalid regex pattern {pattern:?}: {source}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Validator {validator} cannot handle the rule it was given")]
	RuleMismatch { validator: String },

	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Unsupported schema format: {0}")]
	UnsupportedFormat(String),
}

pub type FormResult<T> = Result<T, FormError>;
