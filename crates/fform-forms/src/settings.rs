//! Validation settings
//!
//! Settings come from code, a `.toml`/`.json` file, or environment
//! variables:
//!
//! - `FFORM_STOP_ON_FIRST_ERROR`
//! - `FFORM_RESET_ERRORS_ON_VALIDATE`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding [`FormSettings::stop_on_first_error`]
pub const ENV_STOP_ON_FIRST_ERROR: &str = "FFORM_STOP_ON_FIRST_ERROR";
/// Environment variable overriding [`FormSettings::reset_errors_on_validate`]
pub const ENV_RESET_ERRORS_ON_VALIDATE: &str = "FFORM_RESET_ERRORS_ON_VALIDATE";

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),

	#[error("Invalid value for {key}: {value:?}")]
	InvalidEnv { key: String, value: String },
}

/// Knobs of the validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Skip a field's remaining rules after its first failure
	pub stop_on_first_error: bool,
	/// Clear all errors at the start of every `validate()` call
	pub reset_errors_on_validate: bool,
}

impl FormSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_stop_on_first_error(mut self, enabled: bool) -> Self {
		self.stop_on_first_error = enabled;
		self
	}

	pub fn with_reset_errors_on_validate(mut self, enabled: bool) -> Self {
		self.reset_errors_on_validate = enabled;
		self
	}

	/// Load settings from a configuration file
	///
	/// The format follows the extension: `.toml` or `.json`.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
			path: path.clone(),
			source,
		})?;

		let parsed = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| SettingsError::Parse(format!("TOML parse error: {}", e))),
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::Parse(format!("JSON parse error: {}", e))),
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};
		if let Err(error) = &parsed {
			tracing::warn!(path = %path.display(), %error, "failed to parse form settings");
		}
		parsed
	}

	/// Defaults overridden by the `FFORM_*` environment variables.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::default().merge_env(|key| std::env::var(key).ok())
	}

	/// Applies overrides read through `lookup`, keyed by variable name.
	///
	/// # Examples
	///
	/// ```
	/// use fform_forms::FormSettings;
	///
	/// let settings = FormSettings::default()
	///     .merge_env(|key| (key == "FFORM_STOP_ON_FIRST_ERROR").then(|| "yes".to_string()))
	///     .unwrap();
	/// assert!(settings.stop_on_first_error);
	/// assert!(!settings.reset_errors_on_validate);
	/// ```
	pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(value) = lookup(ENV_STOP_ON_FIRST_ERROR) {
			self.stop_on_first_error = parse_flag(ENV_STOP_ON_FIRST_ERROR, &value)?;
		}
		if let Some(value) = lookup(ENV_RESET_ERRORS_ON_VALIDATE) {
			self.reset_errors_on_validate = parse_flag(ENV_RESET_ERRORS_ON_VALIDATE, &value)?;
		}
		Ok(self)
	}
}

fn parse_flag(key: &str, value: &str) -> Result<bool, SettingsError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(SettingsError::InvalidEnv {
			key: key.to_string(),
			value: value.to_string(),
		}),
	}
}
