//! File type validator for uploaded file MIME types
//!
//! ```
//! use fform_validators::{FileTypeValidator, Validator};
//!
//! let validator = FileTypeValidator::with_mime_types(["image/png", "image/jpeg"]);
//! assert!(validator.validate("image/png").is_ok());
//! assert!(validator.validate("application/pdf").is_err());
//! ```

use crate::{ValidationError, ValidationResult, Validator};

/// MIME type whitelist for uploaded files
///
/// Membership is exact: `image/PNG` does not match `image/png`. An empty
/// content type is always rejected.
#[derive(Debug, Clone, Default)]
pub struct FileTypeValidator {
	allowed_mime_types: Vec<String>,
}

// Common MIME type constants
impl FileTypeValidator {
	pub const MIME_JPEG: &'static str = "image/jpeg";
	pub const MIME_PNG: &'static str = "image/png";
	pub const MIME_GIF: &'static str = "image/gif";
	pub const MIME_WEBP: &'static str = "image/webp";
	pub const MIME_PDF: &'static str = "application/pdf";
	pub const MIME_TEXT: &'static str = "text/plain";
	pub const MIME_CSV: &'static str = "text/csv";
	pub const MIME_ZIP: &'static str = "application/zip";
}

impl FileTypeValidator {
	/// Creates a validator accepting only the given MIME types.
	pub fn with_mime_types<I, S>(mime_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			allowed_mime_types: mime_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates a validator that only allows raster images.
	///
	/// # Examples
	///
	/// ```
	/// use fform_validators::{FileTypeValidator, Validator};
	///
	/// let validator = FileTypeValidator::images_only();
	/// assert!(validator.validate("image/gif").is_ok());
	/// assert!(validator.validate("image/svg+xml").is_err());
	/// ```
	pub fn images_only() -> Self {
		Self::with_mime_types([
			Self::MIME_JPEG,
			Self::MIME_PNG,
			Self::MIME_GIF,
			Self::MIME_WEBP,
		])
	}

	pub fn allowed_mime_types(&self) -> &[String] {
		&self.allowed_mime_types
	}
}

impl Validator<str> for FileTypeValidator {
	fn validate(&self, content_type: &str) -> ValidationResult<()> {
		if content_type.is_empty() {
			return Err(ValidationError::UnsupportedFile { content_type: None });
		}
		if self
			.allowed_mime_types
			.iter()
			.any(|allowed| allowed == content_type)
		{
			Ok(())
		} else {
			Err(ValidationError::UnsupportedFile {
				content_type: Some(content_type.to_string()),
			})
		}
	}
}
