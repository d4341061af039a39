//! E-mail address validator

use crate::{ValidationError, ValidationResult, Validator};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

// Local part: one or more segments of `[-_a-z0-9'+*$^&%=~!?{}]` joined by dots.
//
// Domain part, either:
// - a dotted hostname that neither starts nor ends with `-` or `.`, followed
//   by a 2-6 letter top-level domain
// - a dotted quad of 1-3 digit groups
//
// An optional `:port` suffix is allowed. Matching is ASCII-only and
// case-insensitive: Unicode case folding and Unicode digits are disabled.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	RegexBuilder::new(concat!(
		r"^[\-_a-z0-9'+*$\^\&%=\~!?{}]+(?:\.[\-_a-z0-9'+*$\^\&%=\~!?{}]+)*",
		r"@(?:[a-z0-9](?:[\-a-z0-9.]*[a-z0-9])?\.[a-z]{2,6}|[0-9]{1,3}(?:\.[0-9]{1,3}){3})",
		r"(?::[0-9]+)?$",
	))
	.unicode(false)
	.case_insensitive(true)
	.build()
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string is a plausible e-mail address.
///
/// # Examples
///
/// ```
/// use fform_validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.com").is_ok());
/// assert!(validator.validate("admin@10.0.0.1:25").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a@b.com")]
	#[case("john.doe@example.com")]
	#[case("JOHN.DOE@EXAMPLE.COM")]
	#[case("first.middle.last@sub.example.co.uk")]
	#[case("o'neil@example.ie")]
	#[case("x+tag@example.museum")]
	#[case("{weird}~!?=%&$^*@example.org")]
	#[case("user@my-host.example.com")]
	#[case("user@example.com:8080")]
	#[case("1.2.3.4@5.6.7.8")]
	#[case("root@127.0.0.1:22")]
	#[case("a@b.cd")]
	#[case("a@b.abcdef")]
	fn test_email_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid e-mail");
	}

	#[rstest]
	#[case("")]
	#[case("not-an-email")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@example")]
	#[case("user@example.c")]
	#[case("user@example.abcdefg")]
	#[case("user@-example.com")]
	#[case("user@example-.com")]
	#[case("user@.example.com")]
	#[case("user@exa_mple.com")]
	#[case("user@example.c0m")]
	#[case(".user@example.com")]
	#[case("user.@example.com")]
	#[case("us..er@example.com")]
	#[case("us er@example.com")]
	#[case("user@example.com:")]
	#[case("user@example.com:port")]
	#[case("user@1.2.3")]
	#[case("user@1.2.3.4444")]
	#[case("user@example.com\n")]
	#[case("\u{17F}@example.com")]
	#[case("user@exampl\u{212A}.com")]
	#[case("user@\u{661}.\u{662}.\u{663}.\u{664}")]
	#[case("user@example.com:\u{661}\u{662}")]
	#[case("j\u{F6}rg@example.com")]
	fn test_email_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert_eq!(
			result,
			Err(ValidationError::InvalidEmail),
			"Expected {email:?} to be rejected"
		);
	}
}
