//! Url formatting: raw field values to `<a>`/`<img>` markup or plain labels
//!
//! The formatter runs a fixed pipeline: resolve the url through the url
//! template, resolve the label through the label template, escape both, then
//! assemble markup for the configured render type. Relative urls are resolved
//! against the embedding application's location; urls without an allowed
//! scheme and without a location context degrade to plain escaped text.

pub mod escape;
pub mod resolve;

pub use escape::{encode_uri_component, escape_html};
pub use resolve::{is_scheme_allowed, LocationContext};

use tracing::{debug, trace};

use crate::highlight::{HighlightMap, MergeHighlights};
use crate::params::{FormatType, UrlFormatParams};
use crate::template::{compile, CompiledTemplate, Locals};
use crate::value::FieldValue;

/// Per-call collaborators for [`UrlFormatter::format_html`].
///
/// Everything is optional; an empty context renders plain anchors and leaves
/// relative urls unlinkable.
#[derive(Clone, Copy, Default)]
pub struct RenderContext<'a> {
    field: Option<&'a str>,
    location: Option<&'a LocationContext>,
    highlights: Option<&'a HighlightMap>,
    merge: Option<MergeHighlights<'a>>,
}

impl<'a> RenderContext<'a> {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the field being rendered, used for the highlight lookup
    pub fn with_field(mut self, field: &'a str) -> Self {
        self.field = Some(field);
        self
    }

    /// Location of the embedding application, enabling relative-url
    /// resolution
    pub fn with_location(mut self, location: &'a LocationContext) -> Self {
        self.location = Some(location);
        self
    }

    /// Highlight fragments for the current hit together with the merge
    /// function that applies them to a label
    pub fn with_highlights(
        mut self,
        highlights: &'a HighlightMap,
        merge: MergeHighlights<'a>,
    ) -> Self {
        self.highlights = Some(highlights);
        self.merge = Some(merge);
        self
    }
}

/// Formats raw field values as hyperlinks, image tags, or plain labels.
///
/// Both templates are compiled once at construction and reused for every
/// value this formatter renders.
pub struct UrlFormatter {
    format_type: FormatType,
    url_template: Option<CompiledTemplate>,
    label_template: Option<CompiledTemplate>,
}

impl UrlFormatter {
    pub fn new(params: &UrlFormatParams) -> Self {
        Self {
            format_type: params.format_type,
            url_template: params.url_template.as_deref().map(compile),
            label_template: params.label_template.as_deref().map(compile),
        }
    }

    /// Resolve the url for a value.
    ///
    /// Without a url template the stringified value is the url. With one, the
    /// template sees the value percent-encoded as `value` and verbatim as
    /// `rawValue`.
    fn format_url(&self, value: &FieldValue) -> String {
        let raw = value.to_string();
        match &self.url_template {
            None => raw,
            Some(template) => {
                let mut locals = Locals::new();
                locals.insert("value", encode_uri_component(&raw));
                locals.insert("rawValue", raw);
                template.render(&locals)
            }
        }
    }

    /// Resolve the label for a value. Falls back to the url when no label
    /// template is configured.
    fn format_label(&self, value: &FieldValue, url: &str) -> String {
        match &self.label_template {
            None => url.to_string(),
            Some(template) => {
                let mut locals = Locals::new();
                locals.insert("value", value.to_string());
                locals.insert("url", url.to_string());
                template.render(&locals)
            }
        }
    }

    /// Plain-text conversion: the resolved label, unescaped, no markup
    pub fn format_text(&self, value: &FieldValue) -> String {
        let url = self.format_url(value);
        self.format_label(value, &url)
    }

    /// Html conversion: `<a>` or `<img>` markup with all dynamic content
    /// escaped, or plain escaped text for unlinkable urls.
    pub fn format_html(&self, value: &FieldValue, ctx: &RenderContext<'_>) -> String {
        let raw_url = self.format_url(value);
        let label = escape_html(&self.format_label(value, &raw_url));
        let url = escape_html(&raw_url);

        match self.format_type {
            FormatType::Img => {
                // Without a meaningful label template the best we can do is
                // tell screen readers where the image comes from.
                let alt = if label == url {
                    format!("A dynamically-specified image located at {url}")
                } else {
                    label
                };
                format!(r#"<img src="{url}" alt="{alt}">"#)
            }
            FormatType::Anchor => {
                let prefix = if is_scheme_allowed(&url) {
                    String::new()
                } else {
                    match ctx.location {
                        None => {
                            debug!(url = %url, "no location context, rendering unlinkable url as text");
                            return url;
                        }
                        Some(location) => {
                            let prefix = location.prefix_for(&url);
                            trace!(url = %url, prefix = %prefix, "resolved relative url");
                            prefix
                        }
                    }
                };

                let link_text = match (ctx.field, ctx.highlights, ctx.merge) {
                    (Some(field), Some(highlights), Some(merge)) => {
                        match highlights.get(field) {
                            Some(fragments) => merge(&label, fragments),
                            None => label,
                        }
                    }
                    _ => label,
                };

                format!(r#"<a href="{prefix}{url}" target="_blank">{link_text}</a>"#)
            }
        }
    }
}
