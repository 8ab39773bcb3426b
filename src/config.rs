//! Generator configuration
//!
//! Everything except the target has a target-dependent default, resolved lazily so that switching the target
//! with [`GeneratorConfig::with_target`] also switches the defaults that were not set explicitly.

use docproxy_core::conventions::GENERATED_BANNER;

use crate::backend::Target;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output language
    pub target: Target,
    /// Segment appended to the document's namespace (`None`: target default)
    pub proxy_segment: Option<String>,
    /// Also append the document's short name to the derived namespace
    pub qualify_with_name: bool,
    /// Fully qualified capability marker (`None`: target default)
    pub marker: Option<String>,
    /// Header banner of generated files (empty: no banner)
    pub banner: String,
    /// Number of spaces per indentation level (text backends)
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: Target::Php,
            proxy_segment: None,
            qualify_with_name: false,
            marker: None,
            banner: GENERATED_BANNER.to_string(),
            indent_width: 4,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output language
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Set the namespace segment proxies are placed under
    pub fn with_proxy_segment(mut self, segment: impl Into<String>) -> Self {
        self.proxy_segment = Some(segment.into());
        self
    }

    /// Append the document's short name to the derived namespace
    pub fn with_qualify_with_name(mut self, qualify: bool) -> Self {
        self.qualify_with_name = qualify;
        self
    }

    /// Set the capability marker every proxy implements
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set the header banner; an empty banner is omitted
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Effective proxy segment.
    pub fn proxy_segment(&self) -> &str {
        self.proxy_segment
            .as_deref()
            .unwrap_or_else(|| self.target.backend().default_proxy_segment())
    }

    /// Effective marker name.
    pub fn marker(&self) -> &str {
        self.marker
            .as_deref()
            .unwrap_or_else(|| self.target.backend().default_marker())
    }
}
