//! Submitted values and upload metadata
//!
//! The HTTP layer owns request parsing. It hands the form a [`SubmittedData`]
//! snapshot and the form never reads anything else.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata of an already received file upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
	/// Client-side file name
	#[serde(default)]
	pub name: String,
	/// MIME type reported for the upload
	#[serde(rename = "type", default)]
	pub content_type: String,
	/// Size in bytes
	#[serde(default)]
	pub size: u64,
	/// Where the host stored the upload, if anywhere
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tmp_name: Option<String>,
	/// Upload status code reported by the host (0 = ok)
	#[serde(default)]
	pub error: u32,
}

impl UploadedFile {
	/// Creates upload metadata with a name and MIME type.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::UploadedFile;
	///
	/// let file = UploadedFile::new("cv.pdf", "application/pdf").with_size(2048);
	/// assert_eq!(file.content_type, "application/pdf");
	/// assert_eq!(file.size, 2048);
	/// ```
	pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content_type: content_type.into(),
			..Self::default()
		}
	}

	pub fn with_size(mut self, size: u64) -> Self {
		self.size = size;
		self
	}

	pub fn with_tmp_name(mut self, tmp_name: impl Into<String>) -> Self {
		self.tmp_name = Some(tmp_name.into());
		self
	}
}

/// The raw value stored for one field.
///
/// Equality is type-sensitive: a text value never equals a file value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	Text(String),
	File(UploadedFile),
}

impl FieldValue {
	/// Text view of the value; file records have none.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(text) => Some(text),
			FieldValue::File(_) => None,
		}
	}

	pub fn as_file(&self) -> Option<&UploadedFile> {
		match self {
			FieldValue::File(file) => Some(file),
			FieldValue::Text(_) => None,
		}
	}

	/// Only the empty string is empty; any file record counts as present.
	pub fn is_empty(&self) -> bool {
		matches!(self, FieldValue::Text(text) if text.is_empty())
	}
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Text(String::new())
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<UploadedFile> for FieldValue {
	fn from(file: UploadedFile) -> Self {
		FieldValue::File(file)
	}
}

/// Read-only snapshot of one submission: text fields and file uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedData {
	#[serde(default)]
	pub fields: HashMap<String, String>,
	#[serde(default)]
	pub files: HashMap<String, UploadedFile>,
}

impl SubmittedData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a text field.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::{FieldValue, SubmittedData};
	///
	/// let data = SubmittedData::new().field("name", "Jo");
	/// assert_eq!(data.lookup("name"), Some(FieldValue::from("Jo")));
	/// assert_eq!(data.lookup("missing"), None);
	/// ```
	pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.fields.insert(name.into(), value.into());
		self
	}

	/// Adds a file upload.
	pub fn file(mut self, name: impl Into<String>, file: UploadedFile) -> Self {
		self.files.insert(name.into(), file);
		self
	}

	/// Resolves a field, preferring text fields over uploads of the same name.
	pub fn lookup(&self, name: &str) -> Option<FieldValue> {
		self.fields
			.get(name)
			.map(|text| FieldValue::Text(text.clone()))
			.or_else(|| self.files.get(name).cloned().map(FieldValue::File))
	}
}

impl<K, V> FromIterator<(K, V)> for SubmittedData
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
			files: HashMap::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_fields_take_precedence_over_files() {
		// Arrange
		let data = SubmittedData::new()
			.field("avatar", "text wins")
			.file("avatar", UploadedFile::new("a.png", "image/png"));

		// Act
		let value = data.lookup("avatar");

		// Assert
		assert_eq!(value, Some(FieldValue::from("text wins")));
	}

	#[rstest]
	fn test_value_equality_is_type_sensitive() {
		let text = FieldValue::from("");
		let file = FieldValue::File(UploadedFile::default());

		assert_ne!(text, file);
		assert!(text.is_empty());
		assert!(!file.is_empty());
	}

	#[rstest]
	fn test_uploaded_file_uses_type_key() {
		let file: UploadedFile = serde_json::from_value(json!({
			"name": "a.png",
			"type": "image/png",
			"size": 10,
			"tmp_name": "/tmp/upload-123",
			"error": 0
		}))
		.unwrap();

		assert_eq!(file.content_type, "image/png");
		assert_eq!(file.tmp_name.as_deref(), Some("/tmp/upload-123"));
		assert_eq!(serde_json::to_value(&file).unwrap()["type"], "image/png");
	}

	#[rstest]
	fn test_submitted_data_from_json() {
		let data: SubmittedData = serde_json::from_value(json!({
			"fields": {"email": "a@b.com"},
			"files": {"cv": {"name": "cv.pdf", "type": "application/pdf"}}
		}))
		.unwrap();

		assert_eq!(data.lookup("email"), Some(FieldValue::from("a@b.com")));
		assert_eq!(
			data.lookup("cv").and_then(|v| v.as_file().map(|f| f.name.clone())),
			Some("cv.pdf".to_string())
		);
	}

	#[rstest]
	fn test_submitted_data_from_pairs() {
		let data: SubmittedData = [("a", "1"), ("b", "2")].into_iter().collect();

		assert_eq!(data.fields.len(), 2);
		assert!(data.files.is_empty());
	}
}
