//! Facade tests
//!
//! Exercises the crate through `fform::prelude` the way applications use it.

use fform::prelude::*;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

#[rstest]
fn test_validators_and_forms_agree_on_messages() {
	// Arrange
	let schema = Schema::builder()
		.field("email", [Rule::email()])
		.build()
		.unwrap();
	let direct = EmailValidator::new().validate("nope").unwrap_err();

	// Act
	let mut form = Form::new(schema, &SubmittedData::new().field("email", "nope"));
	form.validate().unwrap();

	// Assert
	assert_eq!(form.errors("email").unwrap(), [direct.to_string()]);
}

#[rstest]
fn test_schema_shared_between_requests() {
	let schema = Arc::new(
		Schema::from_json_str(&json!({"q": [{"rule": "length", "max": 3}]}).to_string()).unwrap(),
	);

	let mut short = Form::new(Arc::clone(&schema), &SubmittedData::new().field("q", "abc"));
	let mut long = Form::new(schema, &SubmittedData::new().field("q", "abcd"));

	assert!(short.validate().unwrap());
	assert!(!long.validate().unwrap());
	assert_eq!(long.errors("q").unwrap(), ["Field length must be at most 3."]);
}

#[cfg(feature = "full")]
#[rstest]
fn test_full_feature_exposes_both_crates() {
	// Arrange
	let validator = fform::validators::LengthValidator::new(Some(2), None);

	// Act
	let form = fform::forms::Form::new(
		fform::forms::Schema::builder().field("q", []).build().unwrap(),
		&fform::forms::SubmittedData::new(),
	);

	// Assert
	assert!(validator.validate("ab").is_ok());
	assert!(form.state().is_valid());
}
