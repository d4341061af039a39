//! Bound forms and the rule dispatcher

use crate::error::{FormError, FormResult};
use crate::registry::{RuleContext, ValidatorRegistry, Verdict};
use crate::schema::Schema;
use crate::settings::FormSettings;
use crate::state::FormState;
use crate::value::{FieldValue, SubmittedData};
use crate::widgets::Widgets;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A schema bound to one submission
///
/// Construct one per request; the schema and registry behind it are shared
/// and immutable.
///
/// # Examples
///
/// ```
/// use fform_forms::{Form, Rule, Schema, SubmittedData};
///
/// let schema = Schema::builder()
///     .field("email", [Rule::required(), Rule::email()])
///     .field("age", [Rule::number()])
///     .build()
///     .unwrap();
/// let data = SubmittedData::new().field("email", "").field("age", "xx");
///
/// let mut form = Form::new(schema, &data);
/// assert!(!form.validate().unwrap());
/// assert_eq!(form.errors("email").unwrap(), ["Required.", "Invalid E-Mail address."]);
/// assert_eq!(form.errors("age").unwrap(), ["Invalid number."]);
/// ```
#[derive(Debug, Clone)]
pub struct Form {
	schema: Arc<Schema>,
	registry: Arc<ValidatorRegistry>,
	settings: FormSettings,
	state: FormState,
}

impl Form {
	/// Binds `data` using the built-in validators and default settings.
	pub fn new(schema: impl Into<Arc<Schema>>, data: &SubmittedData) -> Self {
		Self::builder(schema).bind(data)
	}

	pub fn builder(schema: impl Into<Arc<Schema>>) -> FormBuilder {
		FormBuilder {
			schema: schema.into(),
			registry: None,
			settings: FormSettings::default(),
		}
	}

	/// Runs every rule of every field in declaration order.
	///
	/// Returns `Ok(true)` when every rule passed. Failures are recorded on
	/// the fields, never returned as errors; `Err` is reserved for schema
	/// mistakes such as a rule naming an unregistered validator, which are
	/// reported before any rule runs.
	///
	/// Errors accumulate across calls unless
	/// [`FormSettings::reset_errors_on_validate`] is set.
	pub fn validate(&mut self) -> FormResult<bool> {
		let schema = Arc::clone(&self.schema);
		let registry = Arc::clone(&self.registry);
		Self::check_registered(&schema, &registry)?;

		if self.settings.reset_errors_on_validate {
			self.state.reset_errors();
		}

		let mut valid = true;
		for (field, rules) in schema.fields() {
			for rule in rules {
				let name = rule.validator_name();
				let verdict = {
					let value = self.state.get(field)?;
					if rule.allow_empty && value.is_empty() {
						trace!(field, validator = name, "skipped empty value");
						continue;
					}
					let ctx = RuleContext {
						form: &self.state,
						field,
						value,
						rule,
					};
					registry.resolve(name)?.validate(&ctx)?
				};

				let Verdict::Invalid(message) = verdict else {
					trace!(field, validator = name, "rule passed");
					continue;
				};
				valid = false;
				debug!(field, validator = name, message = ?message, "rule failed");
				match message {
					Some(message) => self.state.append_error(field, message)?,
					None => self.state.mark_failed(field)?,
				}
				if self.settings.stop_on_first_error {
					break;
				}
			}
		}

		debug!(valid, errors = self.state.error_count(), "form validated");
		Ok(valid)
	}

	fn check_registered(schema: &Schema, registry: &ValidatorRegistry) -> FormResult<()> {
		for (field, rules) in schema.fields() {
			if let Some(rule) = rules
				.iter()
				.find(|rule| !registry.contains(rule.validator_name()))
			{
				warn!(field, validator = rule.validator_name(), "unknown validator");
				return Err(FormError::UnknownValidator(
					rule.validator_name().to_string(),
				));
			}
		}
		Ok(())
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn into_state(self) -> FormState {
		self.state
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub fn settings(&self) -> FormSettings {
		self.settings
	}

	/// Messages recorded for `field` so far.
	pub fn errors(&self, field: &str) -> FormResult<&[String]> {
		self.state.errors(field)
	}

	/// Submitted value of `field` as stored at bind time.
	pub fn value(&self, field: &str) -> FormResult<&FieldValue> {
		self.state.get(field)
	}

	/// Input renderer reading this form's values.
	pub fn widgets(&self) -> Widgets<'_> {
		Widgets::new(&self.state)
	}
}

/// Configures a [`Form`] before binding data
///
/// ```
/// use fform_forms::{Form, FormSettings, Rule, Schema, SubmittedData};
///
/// let schema = Schema::builder()
///     .field("code", [Rule::required(), Rule::length(Some(4), None)])
///     .build()
///     .unwrap();
/// let mut form = Form::builder(schema)
///     .settings(FormSettings::new().with_stop_on_first_error(true))
///     .bind(&SubmittedData::new());
///
/// assert!(!form.validate().unwrap());
/// assert_eq!(form.errors("code").unwrap(), ["Required."]);
/// ```
#[derive(Debug)]
pub struct FormBuilder {
	schema: Arc<Schema>,
	registry: Option<Arc<ValidatorRegistry>>,
	settings: FormSettings,
}

impl FormBuilder {
	/// Uses `registry` instead of the shared built-in one.
	pub fn registry(mut self, registry: Arc<ValidatorRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}

	pub fn settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn settings_file(mut self, path: impl Into<PathBuf>) -> FormResult<Self> {
		self.settings = FormSettings::from_file(path)?;
		Ok(self)
	}

	/// Applies the `FFORM_*` environment overrides to the current settings.
	pub fn settings_from_env(mut self) -> FormResult<Self> {
		self.settings = self.settings.merge_env(|key| std::env::var(key).ok())?;
		Ok(self)
	}

	pub fn bind(self, data: &SubmittedData) -> Form {
		let state = FormState::initialize(&self.schema, data);
		Form {
			schema: self.schema,
			registry: self.registry.unwrap_or_else(ValidatorRegistry::shared),
			settings: self.settings,
			state,
		}
	}
}
