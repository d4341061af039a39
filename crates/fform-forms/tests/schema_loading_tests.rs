//! Schema and settings loading tests

use fform_forms::{Form, FormError, FormSettings, RuleKind, Schema, SettingsError, SubmittedData};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

const TOML_SCHEMA: &str = r#"
username = [
	{ rule = "required" },
	{ rule = "length", min = 3, max = 5, message = "3 to 5 characters." },
]
role = [{ rule = "in", choices = ["admin", "user"] }]
age = [{ rule = "number", min = 0, max = 130, allow_empty = true }]
"#;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
fn test_toml_schema_file_drives_validation() {
	// Arrange
	let file = write_temp(".toml", TOML_SCHEMA);
	let schema = Schema::from_file(file.path()).unwrap();
	let data = SubmittedData::new()
		.field("username", "jonathan")
		.field("role", "root");

	// Act
	let mut form = Form::new(schema, &data);
	let valid = form.validate().unwrap();

	// Assert
	assert!(!valid);
	assert_eq!(form.errors("username").unwrap(), ["3 to 5 characters."]);
	assert_eq!(form.errors("role").unwrap(), ["Value not in range."]);
	assert!(form.errors("age").unwrap().is_empty());
}

#[rstest]
fn test_json_schema_file_matches_toml() {
	let json = write_temp(
		".json",
		&serde_json::json!({
			"username": [
				{"rule": "required"},
				{"rule": "length", "min": 3, "max": 5, "message": "3 to 5 characters."}
			],
			"role": [{"rule": "in", "choices": ["admin", "user"]}],
			"age": [{"rule": "number", "min": 0, "max": 130, "allow_empty": true}]
		})
		.to_string(),
	);
	let toml = write_temp(".toml", TOML_SCHEMA);

	let from_json = Schema::from_file(json.path()).unwrap();
	let from_toml = Schema::from_file(toml.path()).unwrap();

	assert_eq!(
		from_json.field_names().collect::<Vec<_>>(),
		from_toml.field_names().collect::<Vec<_>>()
	);
	for field in from_json.field_names() {
		let json_rules = from_json.rules(field).unwrap();
		let toml_rules = from_toml.rules(field).unwrap();
		assert_eq!(json_rules.len(), toml_rules.len());
		for (a, b) in json_rules.iter().zip(toml_rules) {
			assert_eq!(a.validator_name(), b.validator_name());
			assert_eq!(a.message, b.message);
			assert_eq!(a.allow_empty, b.allow_empty);
		}
	}
	assert!(matches!(
		from_toml.rules("age").unwrap()[0].kind,
		RuleKind::Number { min: Some(0.0), max: Some(130.0), .. }
	));
}

#[rstest]
#[case(".yaml")]
#[case(".txt")]
fn test_unsupported_schema_extension(#[case] suffix: &str) {
	let file = write_temp(suffix, "{}");

	let result = Schema::from_file(file.path());

	assert!(matches!(result, Err(FormError::UnsupportedFormat(_))));
}

#[rstest]
#[case(r#"{"a": [{"rule": "regex", "pattern": "([a-z"}]}"#)]
#[case(r#"{"a": [{"rule": "compare", "other": "b"}]}"#)]
#[case(r#"{"a": [{"rule": "frobnicate"}]}"#)]
#[case(r#"{"a": [{"rule": "in"}]}"#)]
fn test_malformed_schema_rejected_at_load(#[case] source: &str) {
	assert!(matches!(Schema::from_json_str(source), Err(FormError::Json(_))));
}

#[rstest]
fn test_misspelled_arguments_rejected_at_load() {
	// Arrange
	let json = r#"{
		"pin": [{"rule": "length", "mn": 4, "mx": 4}],
		"x": [{"rule": "required", "pattern": "^a$", "mesage": "typo"}]
	}"#;
	let toml = r#"pin = [{ rule = "length", min = 4, mesage = "Four digits." }]"#;

	// Act
	let from_json = Schema::from_json_str(json);
	let from_toml = Schema::from_toml_str(toml);

	// Assert
	assert!(matches!(&from_json, Err(FormError::Json(e)) if e.to_string().contains("`mn`")));
	assert!(matches!(&from_toml, Err(FormError::Toml(e)) if e.to_string().contains("`mesage`")));
}

#[rstest]
fn test_settings_file() {
	let file = write_temp(
		".toml",
		"stop_on_first_error = true\nreset_errors_on_validate = true\n",
	);

	let settings = FormSettings::from_file(file.path()).unwrap();

	assert_eq!(
		settings,
		FormSettings::new()
			.with_stop_on_first_error(true)
			.with_reset_errors_on_validate(true)
	);
}

#[rstest]
fn test_settings_file_with_bad_contents() {
	let file = write_temp(".json", "{\"stop_on_first_error\": \"maybe\"}");

	assert!(matches!(
		FormSettings::from_file(file.path()),
		Err(SettingsError::Parse(_))
	));
}
