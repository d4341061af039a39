//! String validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::{Regex, RegexBuilder};

/// Presence validator
///
/// Any non-empty string passes, including `"0"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
	/// Creates a new RequiredValidator.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{RequiredValidator, Validator};
	///
	/// let validator = RequiredValidator::new();
	/// assert!(validator.validate("0").is_ok());
	/// assert!(validator.validate("").is_err());
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for RequiredValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() {
			Err(ValidationError::Required)
		} else {
			Ok(())
		}
	}
}

/// Regex validator
///
/// Patterns are compiled case-insensitively; an inline `(?-i)` group in the
/// pattern restores case-sensitive matching.
#[derive(Debug, Clone)]
pub struct RegexValidator {
	regex: Regex,
}

impl RegexValidator {
	/// Creates a new RegexValidator with the specified regex pattern.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{RegexValidator, Validator};
	///
	/// let validator = RegexValidator::new(r"^[a-z]{3}-\d{2}$").unwrap();
	/// assert!(validator.validate("abc-12").is_ok());
	/// assert!(validator.validate("ABC-12").is_ok());
	/// assert!(validator.validate("abc12").is_err());
	/// ```
	///
	/// # Errors
	///
	/// Returns an error if the regex pattern is invalid.
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
		Ok(Self { regex })
	}

	/// Wraps an already compiled regex, keeping its flags as they are.
	pub fn from_regex(regex: Regex) -> Self {
		Self { regex }
	}

	/// Returns the source pattern.
	pub fn pattern(&self) -> &str {
		self.regex.as_str()
	}
}

impl Validator<str> for RegexValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::PatternMismatch)
		}
	}
}

/// Length range validator
///
/// Length is measured in characters, not bytes. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthValidator {
	min: Option<usize>,
	max: Option<usize>,
}

impl LengthValidator {
	/// Creates a validator with optional bounds.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{LengthValidator, Validator};
	///
	/// let validator = LengthValidator::new(None, Some(3));
	/// assert!(validator.validate("").is_ok());
	/// assert!(validator.validate("日本語").is_ok());
	/// assert!(validator.validate("abcd").is_err());
	/// ```
	pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
		Self { min, max }
	}

	/// Creates a validator requiring `min <= length <= max`.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{LengthValidator, Validator};
	///
	/// let validator = LengthValidator::between(3, 5);
	/// assert!(validator.validate("abc").is_ok());
	/// assert!(validator.validate("ab").is_err());
	/// assert!(validator.validate("abcdef").is_err());
	/// ```
	pub fn between(min: usize, max: usize) -> Self {
		Self::new(Some(min), Some(max))
	}

	pub fn min(&self) -> Option<usize> {
		self.min
	}

	pub fn max(&self) -> Option<usize> {
		self.max
	}
}

impl Validator<str> for LengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if let Some(min) = self.min
			&& length < min
		{
			return Err(ValidationError::TooShort {
				length,
				min,
				max: self.max,
			});
		}
		if let Some(max) = self.max
			&& length > max
		{
			return Err(ValidationError::TooLong {
				length,
				min: self.min,
				max,
			});
		}
		Ok(())
	}
}

/// Set-membership validator
///
/// Membership is exact: no trimming and no case folding.
#[derive(Debug, Clone, Default)]
pub struct ChoiceValidator {
	choices: Vec<String>,
}

impl ChoiceValidator {
	/// Creates a validator accepting only the given values.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{ChoiceValidator, Validator};
	///
	/// let validator = ChoiceValidator::new(["a", "b"]);
	/// assert!(validator.validate("a").is_ok());
	/// assert!(validator.validate("c").is_err());
	/// assert!(validator.validate("A").is_err());
	/// ```
	pub fn new<I, S>(choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			choices: choices.into_iter().map(Into::into).collect(),
		}
	}

	pub fn choices(&self) -> &[String] {
		&self.choices
	}
}

impl Validator<str> for ChoiceValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.choices.iter().any(|choice| choice == value) {
			Ok(())
		} else {
			Err(ValidationError::NotInChoices {
				value: value.to_string(),
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("x", true)]
	#[case("0", true)]
	#[case(" ", true)]
	#[case("", false)]
	fn test_required_validator(#[case] value: &str, #[case] valid: bool) {
		assert_eq!(RequiredValidator::new().validate(value).is_ok(), valid);
	}

	#[rstest]
	fn test_regex_validator_is_case_insensitive() {
		// Arrange
		let validator = RegexValidator::new(r"^hello$").unwrap();

		// Act + Assert
		assert!(validator.validate("HeLLo").is_ok());
		assert!(validator.validate("hello world").is_err());
	}

	#[rstest]
	fn test_regex_validator_inline_flag_restores_case() {
		let validator = RegexValidator::new(r"(?-i)^hello$").unwrap();

		assert!(validator.validate("hello").is_ok());
		assert!(validator.validate("HELLO").is_err());
	}

	#[rstest]
	fn test_regex_validator_invalid_pattern() {
		assert!(RegexValidator::new(r"^(unclosed").is_err());
	}

	#[rstest]
	fn test_regex_validator_error_type() {
		let validator = RegexValidator::new(r"^\d+$").unwrap();

		assert_eq!(
			validator.validate("abc"),
			Err(ValidationError::PatternMismatch)
		);
	}

	#[rstest]
	#[case("ab", false)]
	#[case("abc", true)]
	#[case("abcde", true)]
	#[case("abcdef", false)]
	fn test_length_between(#[case] value: &str, #[case] valid: bool) {
		assert_eq!(LengthValidator::between(3, 5).validate(value).is_ok(), valid);
	}

	#[rstest]
	fn test_length_counts_characters() {
		// Arrange
		let validator = LengthValidator::between(3, 3);

		// Act
		let result = validator.validate("ñàé");

		// Assert
		assert!(result.is_ok(), "three characters in six bytes");
	}

	#[rstest]
	fn test_length_reports_bounds() {
		let validator = LengthValidator::between(3, 5);

		assert_eq!(
			validator.validate("ab"),
			Err(ValidationError::TooShort {
				length: 2,
				min: 3,
				max: Some(5)
			})
		);
		assert_eq!(
			validator.validate("abcdef"),
			Err(ValidationError::TooLong {
				length: 6,
				min: Some(3),
				max: 5
			})
		);
	}

	#[rstest]
	fn test_length_without_bounds_accepts_anything() {
		let validator = LengthValidator::default();

		assert!(validator.validate("").is_ok());
		assert!(validator.validate(&"x".repeat(10_000)).is_ok());
	}

	#[rstest]
	fn test_choice_validator() {
		let validator = ChoiceValidator::new(vec!["red".to_string(), "green".to_string()]);

		assert!(validator.validate("red").is_ok());
		assert!(validator.validate(" red").is_err());
		assert_eq!(
			validator.validate("blue"),
			Err(ValidationError::NotInChoices {
				value: "blue".into()
			})
		);
		assert_eq!(validator.choices().len(), 2);
	}

	#[rstest]
	fn test_empty_choice_set_rejects_everything() {
		let validator = ChoiceValidator::default();

		assert!(validator.validate("").is_err());
		assert!(validator.validate("a").is_err());
	}
}
