//! Format parameters and their TOML representation
//!
//! Parameters are permissive by design: absent keys fall back to defaults and
//! unrecognized type ids fall back to the anchor rendering. Only unreadable
//! files and malformed TOML are reported as errors.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading format parameters
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Failed to read params file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse params TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a formatted value is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatType {
    /// Hyperlink (the default)
    #[default]
    Anchor,
    /// Image tag
    Img,
}

impl FormatType {
    /// Parse a type id. Anything other than `"img"` renders as an anchor.
    pub fn parse(id: &str) -> Self {
        match id {
            "img" => FormatType::Img,
            _ => FormatType::Anchor,
        }
    }

    /// The type id as written in params files
    pub fn id(&self) -> &'static str {
        match self {
            FormatType::Anchor => "a",
            FormatType::Img => "img",
        }
    }
}

/// Parameters controlling url and label formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlFormatParams {
    pub format_type: FormatType,
    /// Template producing the url; `None` formats the value itself as the url
    pub url_template: Option<String>,
    /// Template producing the link text; `None` falls back to the url
    pub label_template: Option<String>,
}

/// TOML structure for deserializing params
#[derive(Deserialize)]
struct TomlParams {
    #[serde(rename = "type")]
    format_type: Option<String>,
    url_template: Option<String>,
    label_template: Option<String>,
}

impl UrlFormatParams {
    /// Create parameters with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render type
    pub fn with_type(mut self, format_type: FormatType) -> Self {
        self.format_type = format_type;
        self
    }

    /// Set the url template
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Set the label template
    pub fn with_label_template(mut self, template: impl Into<String>) -> Self {
        self.label_template = Some(template.into());
        self
    }

    /// Load parameters from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ParamsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load parameters from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ParamsError> {
        let parsed: TomlParams = toml::from_str(content)?;

        Ok(UrlFormatParams {
            format_type: parsed
                .format_type
                .as_deref()
                .map(FormatType::parse)
                .unwrap_or_default(),
            url_template: parsed.url_template,
            label_template: parsed.label_template,
        })
    }
}
