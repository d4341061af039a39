//! Numeric validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Optionally signed integer or decimal with optional exponent. Leading and
// trailing ASCII whitespace is tolerated; hex, `inf`, `NaN` and non-ASCII
// digits are not.
static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
		.expect("NUMERIC_REGEX: invalid regex pattern")
});

const NUMERIC_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Returns `true` when `value` is a numeric string.
///
/// # Examples
///
/// ```
/// use fform_validators::is_numeric;
///
/// assert!(is_numeric("42"));
/// assert!(is_numeric("-1.5e3"));
/// assert!(is_numeric(" .5"));
/// assert!(!is_numeric("0x1A"));
/// assert!(!is_numeric("12abc"));
/// ```
pub fn is_numeric(value: &str) -> bool {
	NUMERIC_REGEX.is_match(value)
}

/// Parses a numeric string, returning `None` when it is not numeric.
///
/// # Examples
///
/// ```
/// use fform_validators::parse_number;
///
/// assert_eq!(parse_number("+7"), Some(7.0));
/// assert_eq!(parse_number("1."), Some(1.0));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(value: &str) -> Option<f64> {
	if !is_numeric(value) {
		return None;
	}
	value.trim_matches(NUMERIC_WHITESPACE).parse().ok()
}

/// Number validator with optional inclusive bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator {
	min: Option<f64>,
	max: Option<f64>,
}

impl NumberValidator {
	/// Creates a validator that only checks numeric syntax.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{NumberValidator, Validator};
	///
	/// let validator = NumberValidator::new();
	/// assert!(validator.validate("3.14").is_ok());
	/// assert!(validator.validate("xx").is_err());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a validator that also enforces inclusive bounds.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{NumberValidator, Validator};
	///
	/// let validator = NumberValidator::with_range(Some(18.0), Some(130.0));
	/// assert!(validator.validate("18").is_ok());
	/// assert!(validator.validate("17.9").is_err());
	/// ```
	pub fn with_range(min: Option<f64>, max: Option<f64>) -> Self {
		Self { min, max }
	}

	pub fn min(&self) -> Option<f64> {
		self.min
	}

	pub fn max(&self) -> Option<f64> {
		self.max
	}
}

impl Validator<str> for NumberValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let number = parse_number(value).ok_or(ValidationError::InvalidNumber)?;
		let below = self.min.is_some_and(|min| number < min);
		let above = self.max.is_some_and(|max| number > max);
		if below || above {
			return Err(ValidationError::NumberOutOfRange {
				value: number,
				min: self.min,
				max: self.max,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("0")]
	#[case("42")]
	#[case("-42")]
	#[case("+42")]
	#[case("3.14")]
	#[case("-.5")]
	#[case("5.")]
	#[case("1e10")]
	#[case("1.5E-3")]
	#[case(" 12")]
	#[case("12 ")]
	#[case("\t7\n")]
	fn test_numeric(#[case] value: &str) {
		assert!(is_numeric(value), "Expected {value:?} to be numeric");
		assert!(NumberValidator::new().validate(value).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case(" ")]
	#[case("xx")]
	#[case("12abc")]
	#[case("1.2.3")]
	#[case("0x1A")]
	#[case("1e")]
	#[case(".")]
	#[case("-")]
	#[case("inf")]
	#[case("NaN")]
	#[case("1 000")]
	#[case("\u{661}\u{662}")]
	#[case("\u{FF11}")]
	fn test_not_numeric(#[case] value: &str) {
		assert!(!is_numeric(value), "Expected {value:?} to be rejected");
		assert_eq!(
			NumberValidator::new().validate(value),
			Err(ValidationError::InvalidNumber)
		);
	}

	#[rstest]
	fn test_number_range() {
		// Arrange
		let validator = NumberValidator::with_range(Some(1.0), Some(10.0));

		// Act + Assert
		assert!(validator.validate("1").is_ok());
		assert!(validator.validate("10.0").is_ok());
		assert_eq!(
			validator.validate("10.5"),
			Err(ValidationError::NumberOutOfRange {
				value: 10.5,
				min: Some(1.0),
				max: Some(10.0)
			})
		);
		assert!(validator.validate("0").is_err());
	}

	proptest! {
		#[test]
		fn prop_integers_are_numeric(n in any::<i64>()) {
			let text = n.to_string();
			prop_assert!(is_numeric(&text));
			prop_assert_eq!(parse_number(&text), Some(n as f64));
		}

		#[test]
		fn prop_is_numeric_agrees_with_parse_number(s in "[0-9+.eE \\x{661}-]{0,6}") {
			prop_assert_eq!(is_numeric(&s), parse_number(&s).is_some());
		}

		#[test]
		fn prop_letters_are_not_numeric(s in "[a-df-zA-DF-Z]+") {
			prop_assert!(!is_numeric(&s));
		}
	}
}
