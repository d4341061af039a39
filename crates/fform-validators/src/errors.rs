//! Validation error types

/// Failure reported by a validator.
///
/// The `Display` output of each variant is the default message recorded
/// against a field when no caller-supplied message overrides it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("Required.")]
	Required,

	#[error("Invalid input.")]
	PatternMismatch,

	#[error("Invalid E-Mail address.")]
	InvalidEmail,

	#[error("Value not in range.")]
	NotInChoices { value: String },

	#[error("Invalid number.")]
	InvalidNumber,

	#[error("{}", range_message("Number", *min, *max))]
	NumberOutOfRange {
		value: f64,
		min: Option<f64>,
		max: Option<f64>,
	},

	#[error("{}", range_message("Field length", Some(*min), *max))]
	TooShort {
		length: usize,
		min: usize,
		max: Option<usize>,
	},

	#[error("{}", range_message("Field length", *min, Some(*max)))]
	TooLong {
		length: usize,
		min: Option<usize>,
		max: usize,
	},

	#[error("Field not matching {other}.")]
	Mismatch { other: String },

	#[error("Unsupported file.")]
	UnsupportedFile { content_type: Option<String> },

	#[error("{0}")]
	Custom(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Formats a bounded-range message, naming only the bounds that exist.
fn range_message<T: std::fmt::Display>(subject: &str, min: Option<T>, max: Option<T>) -> String {
	match (min, max) {
		(Some(min), Some(max)) => format!("{subject} must be between {min} and {max}."),
		(Some(min), None) => format!("{subject} must be at least {min}."),
		(None, Some(max)) => format!("{subject} must be at most {max}."),
		(None, None) => format!("{subject} is out of range."),
	}
}
