//! Validator tests
//!
//! Cross-validator behavior through the public `Validator` trait.

use fform_validators::prelude::*;
use rstest::rstest;

#[rstest]
#[case("0", true)]
#[case("", false)]
#[case(" ", true)]
fn test_required_truthiness(#[case] value: &str, #[case] ok: bool) {
	assert_eq!(RequiredValidator::new().validate(value).is_ok(), ok);
}

#[rstest]
#[case(" 12 ", true)]
#[case("1e3", true)]
#[case("-.5", true)]
#[case("0x1A", false)]
#[case("1,000", false)]
#[case("", false)]
fn test_number_accepts_numeric_strings(#[case] value: &str, #[case] ok: bool) {
	assert_eq!(NumberValidator::new().validate(value).is_ok(), ok);
}

#[rstest]
fn test_regex_is_case_insensitive() {
	// Arrange
	let validator = RegexValidator::new("^[a-z]+$").unwrap();

	// Act + Assert
	assert!(validator.validate("Hello").is_ok());
	assert_eq!(validator.validate("he llo"), Err(ValidationError::PatternMismatch));
}

#[rstest]
#[case("héllo", true)]
#[case("hé", false)]
fn test_length_counts_characters(#[case] value: &str, #[case] ok: bool) {
	assert_eq!(LengthValidator::new(Some(3), Some(5)).validate(value).is_ok(), ok);
}

#[rstest]
fn test_boxed_validators_run_in_order() {
	let chain: Vec<Box<dyn Validator<str>>> = vec![
		Box::new(RequiredValidator::new()),
		Box::new(EmailValidator::new()),
	];

	let errors: Vec<String> = chain
		.iter()
		.filter_map(|v| v.validate("").err())
		.map(|e| e.to_string())
		.collect();

	assert_eq!(errors, ["Required.", "Invalid E-Mail address."]);
}

#[rstest]
fn test_file_type_whitelist() {
	let validator = FileTypeValidator::with_mime_types(["application/pdf"]);

	assert!(validator.validate("application/pdf").is_ok());
	assert_eq!(
		validator.validate("image/png"),
		Err(ValidationError::UnsupportedFile {
			content_type: Some("image/png".to_string())
		})
	);
}
