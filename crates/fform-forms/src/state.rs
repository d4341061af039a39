//! Field value store
//!
//! A [`FormState`] holds one [`FieldEntry`] per declared field: the value
//! submitted for it and the messages of every rule that rejected it, in the
//! order the rules ran.

use crate::error::{FormError, FormResult};
use crate::schema::Schema;
use crate::value::{FieldValue, SubmittedData};
use indexmap::IndexMap;
use serde::Serialize;

/// Runtime value and accumulated errors of one field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldEntry {
	pub value: FieldValue,
	pub errors: Vec<String>,
	/// A rule failed without recording a message
	#[serde(skip)]
	silent_failure: bool,
}

impl FieldEntry {
	pub fn new(value: FieldValue) -> Self {
		Self {
			value,
			errors: Vec::new(),
			silent_failure: false,
		}
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// `true` once any rule rejected the value, with or without a message.
	pub fn has_failed(&self) -> bool {
		self.silent_failure || self.has_errors()
	}
}

/// Per-submission store of field values and errors.
///
/// Build one per request; it is not meant to be shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormState {
	entries: IndexMap<String, FieldEntry>,
}

impl FormState {
	/// Creates one entry per schema field, in declaration order.
	///
	/// Values are stored as submitted; fields missing from `data` get an
	/// empty string. Submitted keys the schema does not declare are dropped.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::{FieldValue, FormState, Rule, Schema, SubmittedData};
	///
	/// let schema = Schema::builder()
	///     .field("name", [Rule::required()])
	///     .field("city", [])
	///     .build()
	///     .unwrap();
	/// let data = SubmittedData::new().field("name", "  Jo ").field("forged", "x");
	///
	/// let state = FormState::initialize(&schema, &data);
	/// assert_eq!(state.get("name").unwrap(), &FieldValue::from("  Jo "));
	/// assert_eq!(state.get("city").unwrap(), &FieldValue::from(""));
	/// assert!(!state.contains("forged"));
	/// ```
	pub fn initialize(schema: &Schema, data: &SubmittedData) -> Self {
		let entries: IndexMap<String, FieldEntry> = schema
			.field_names()
			.map(|name| {
				let value = data.lookup(name).unwrap_or_default();
				(name.to_string(), FieldEntry::new(value))
			})
			.collect();
		tracing::debug!(fields = entries.len(), "initialized form state");
		Self { entries }
	}

	/// Returns the stored value of a declared field.
	pub fn get(&self, field: &str) -> FormResult<&FieldValue> {
		self.entry(field).map(|entry| &entry.value)
	}

	pub fn entry(&self, field: &str) -> FormResult<&FieldEntry> {
		self.entries
			.get(field)
			.ok_or_else(|| FormError::UnknownField(field.to_string()))
	}

	/// Appends a message to a declared field's error list.
	pub fn append_error(&mut self, field: &str, message: impl Into<String>) -> FormResult<()> {
		let entry = self
			.entries
			.get_mut(field)
			.ok_or_else(|| FormError::UnknownField(field.to_string()))?;
		entry.errors.push(message.into());
		Ok(())
	}

	/// Marks a declared field as failed without recording a message.
	///
	/// A `custom` rule without a caller message fails this way; the field
	/// stays out of [`FormState::error_map`] but [`FormState::is_valid`]
	/// turns `false`.
	pub fn mark_failed(&mut self, field: &str) -> FormResult<()> {
		let entry = self
			.entries
			.get_mut(field)
			.ok_or_else(|| FormError::UnknownField(field.to_string()))?;
		entry.silent_failure = true;
		Ok(())
	}

	/// Returns the messages recorded for a declared field.
	pub fn errors(&self, field: &str) -> FormResult<&[String]> {
		self.entry(field).map(|entry| entry.errors.as_slice())
	}

	/// Fields with at least one error, mapped to their messages.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::{FormState, Schema, SubmittedData};
	///
	/// let schema = Schema::builder().field("a", []).field("b", []).build().unwrap();
	/// let mut state = FormState::initialize(&schema, &SubmittedData::new());
	/// state.append_error("b", "Nope.").unwrap();
	///
	/// let errors = state.error_map();
	/// assert_eq!(errors.len(), 1);
	/// assert_eq!(errors["b"], vec!["Nope.".to_string()]);
	/// ```
	pub fn error_map(&self) -> IndexMap<&str, &[String]> {
		self.entries
			.iter()
			.filter(|(_, entry)| entry.has_errors())
			.map(|(name, entry)| (name.as_str(), entry.errors.as_slice()))
			.collect()
	}

	pub fn error_count(&self) -> usize {
		self.entries.values().map(|entry| entry.errors.len()).sum()
	}

	/// `true` while no rule has failed on any field.
	pub fn is_valid(&self) -> bool {
		!self.entries.values().any(FieldEntry::has_failed)
	}

	/// Clears every error list and failure mark, keeping the values.
	pub fn reset_errors(&mut self) {
		for entry in self.entries.values_mut() {
			entry.errors.clear();
			entry.silent_failure = false;
		}
	}

	pub fn contains(&self, field: &str) -> bool {
		self.entries.contains_key(field)
	}

	pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
		self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
