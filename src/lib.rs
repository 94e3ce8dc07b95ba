//! Linkform - field value to hyperlink/image formatting
//!
//! This library compiles `{{name}}` micro-templates and renders raw field
//! values as `<a>` links, `<img>` tags, or plain labels, with html escaping,
//! a url scheme allow-list, and relative→absolute url resolution against the
//! embedding application's location.
//!
//! # Example
//!
//! ```rust
//! use linkform::{FieldValue, RenderContext, UrlFormatParams, UrlFormatter};
//!
//! let params = UrlFormatParams::new()
//!     .with_url_template("https://example.com/user/{{value}}");
//! let formatter = UrlFormatter::new(&params);
//!
//! let html = formatter.format_html(&FieldValue::from("john"), &RenderContext::new());
//! assert_eq!(
//!     html,
//!     r#"<a href="https://example.com/user/john" target="_blank">https://example.com/user/john</a>"#
//! );
//! ```

pub mod format;
pub mod highlight;
pub mod params;
pub mod template;
pub mod value;

pub use format::{
    encode_uri_component, escape_html, is_scheme_allowed, LocationContext, RenderContext,
    UrlFormatter,
};
pub use highlight::{HighlightMap, MergeHighlights};
pub use params::{FormatType, ParamsError, UrlFormatParams};
pub use template::{compile, CompiledTemplate, Locals, Segment};
pub use value::FieldValue;

/// Format a single value with the given params and an empty render context.
///
/// This is the one-shot entry point. It compiles the templates on every call;
/// construct a [`UrlFormatter`] to format many values.
///
/// # Example
///
/// ```rust
/// use linkform::{format_value, UrlFormatParams};
///
/// let html = format_value("https://example.com", &UrlFormatParams::new());
/// assert!(html.starts_with("<a href="));
/// ```
pub fn format_value(value: impl Into<FieldValue>, params: &UrlFormatParams) -> String {
    UrlFormatter::new(params).format_html(&value.into(), &RenderContext::new())
}
