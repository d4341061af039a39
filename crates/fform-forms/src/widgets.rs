//! HTML input rendering
//!
//! Widgets read the values stored in a [`FormState`] so a re-rendered form
//! shows what the user submitted.

use crate::state::FormState;
use crate::value::FieldValue;

/// Escapes text for use inside a double-quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use fform_forms::widgets::escape_html_attr;
///
/// assert_eq!(escape_html_attr(r#"Jo"e & <b>"#), "Jo&quot;e &amp; &lt;b&gt;");
/// assert_eq!(escape_html_attr("it's"), "it&#x27;s");
/// ```
pub fn escape_html_attr(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
		.replace('\n', "&#10;")
		.replace('\r', "&#13;")
}

/// Serializes attributes as space-separated `key="value"` pairs.
///
/// Values are escaped; keys are written as given.
///
/// ```
/// use fform_forms::html_params;
///
/// assert_eq!(html_params([("class", "wide"), ("title", "a<b")]), r#"class="wide" title="a&lt;b""#);
/// assert_eq!(html_params(Vec::<(&str, &str)>::new()), "");
/// ```
pub fn html_params<I, K, V>(attrs: I) -> String
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	attrs
		.into_iter()
		.map(|(key, value)| format!(r#"{}="{}""#, key.as_ref(), escape_html_attr(value.as_ref())))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Renders one `<input>` for `name`.
///
/// The defaults `type`, `value`, `name` and `id` come first, in that order;
/// an entry in `attrs` with the same key replaces the default in place, and
/// the remaining entries follow in the order given. The default `value` is
/// the stored text of `name`, or empty for uploads and undeclared fields.
pub fn render_input(state: &FormState, name: &str, input_type: &str, attrs: &[(&str, &str)]) -> String {
	let value = match state.get(name) {
		Ok(FieldValue::Text(text)) => text.as_str(),
		Ok(FieldValue::File(_)) | Err(_) => "",
	};
	render_with_value(name, input_type, value, attrs)
}

fn render_with_value(name: &str, input_type: &str, value: &str, attrs: &[(&str, &str)]) -> String {
	let mut merged: Vec<(&str, &str)> = vec![
		("type", input_type),
		("value", value),
		("name", name),
		("id", name),
	];
	for &(key, attr) in attrs {
		match merged.iter_mut().find(|(existing, _)| *existing == key) {
			Some(slot) => slot.1 = attr,
			None => merged.push((key, attr)),
		}
	}
	format!("<input {} />", html_params(merged))
}

/// Input renderer bound to a form's state
///
/// # Examples
///
/// ```
/// use fform_forms::{Form, Schema, SubmittedData};
///
/// let schema = Schema::builder().field("name", []).build().unwrap();
/// let form = Form::new(schema, &SubmittedData::new().field("name", "Jo\"e"));
///
/// assert_eq!(
///     form.widgets().input("name", &[("class", "wide")]),
///     r#"<input type="text" value="Jo&quot;e" name="name" id="name" class="wide" />"#
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Widgets<'a> {
	state: &'a FormState,
}

impl<'a> Widgets<'a> {
	pub fn new(state: &'a FormState) -> Self {
		Self { state }
	}

	/// `<input>` defaulting to `type="text"`; see [`render_input`].
	pub fn input(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		render_input(self.state, name, "text", attrs)
	}

	pub fn text(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		self.input(name, attrs)
	}

	/// Password inputs never echo the submitted value; a `value` entry in
	/// `attrs` is still honored.
	pub fn password(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		render_with_value(name, "password", "", attrs)
	}

	pub fn email(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		render_input(self.state, name, "email", attrs)
	}

	pub fn hidden(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		render_input(self.state, name, "hidden", attrs)
	}

	/// File inputs never echo a value back.
	pub fn file(&self, name: &str, attrs: &[(&str, &str)]) -> String {
		render_input(self.state, name, "file", attrs)
	}
}
