//! Form schema: fields and their ordered rules
//!
//! A [`Schema`] is immutable once built and is meant to be shared (behind an
//! `Arc`) by every form created from it. Building one, in code or from a
//! JSON/TOML document, checks each rule against the declared fields.
//!
//! ```
//! use fform_forms::Schema;
//!
//! let schema = Schema::from_toml_str(r#"
//! email = [{ rule = "required" }, { rule = "email" }]
//! age = [{ rule = "number", min = 0, allow_empty = true }]
//! "#).unwrap();
//!
//! assert_eq!(schema.field_names().collect::<Vec<_>>(), ["email", "age"]);
//! assert_eq!(schema.rules("email").unwrap().len(), 2);
//! ```

use crate::error::{FormError, FormResult};
use crate::rule::Rule;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Ordered mapping from field name to its ordered rules
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, Vec<Rule>>")]
pub struct Schema {
	fields: IndexMap<String, Vec<Rule>>,
}

impl Schema {
	/// Builds a schema after checking every rule's declaration.
	pub fn new(fields: IndexMap<String, Vec<Rule>>) -> FormResult<Self> {
		for (field, rules) in &fields {
			for rule in rules {
				rule.check_declaration(field, fields.keys().map(String::as_str))?;
			}
		}
		Ok(Self { fields })
	}

	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::default()
	}

	/// Parses a JSON object of `field -> [rule, ...]`.
	pub fn from_json_str(source: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(source)?)
	}

	/// Parses a TOML table of `field = [rule, ...]`.
	pub fn from_toml_str(source: &str) -> FormResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Loads a schema file, picking the format from its extension.
	pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(FormError::UnsupportedFormat(format!(
				"{} (supported formats: .toml, .json)",
				path.display()
			))),
		}
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &[Rule])> {
		self.fields
			.iter()
			.map(|(name, rules)| (name.as_str(), rules.as_slice()))
	}

	pub fn rules(&self, field: &str) -> FormResult<&[Rule]> {
		self.fields
			.get(field)
			.map(Vec::as_slice)
			.ok_or_else(|| FormError::UnknownField(field.to_string()))
	}

	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl TryFrom<IndexMap<String, Vec<Rule>>> for Schema {
	type Error = FormError;

	fn try_from(fields: IndexMap<String, Vec<Rule>>) -> Result<Self, Self::Error> {
		Schema::new(fields)
	}
}

/// Incremental [`Schema`] construction
///
/// Declaring a field twice appends to its rule list.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
	fields: IndexMap<String, Vec<Rule>>,
}

impl SchemaBuilder {
	pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
		self.fields.entry(name.into()).or_default().extend(rules);
		self
	}

	pub fn build(self) -> FormResult<Schema> {
		Schema::new(self.fields)
	}
}
