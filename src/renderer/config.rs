//! Configuration for SVG rendering

/// Configuration options for SVG link fragments
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cl-" for "cl-link")
    pub class_prefix: Option<String>,

    /// Stroke width of the selection border
    pub border_width: f64,

    /// Opacity applied to the hover highlight layer
    pub hover_opacity: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            class_prefix: Some("cl-".to_string()),
            border_width: 1.0,
            hover_opacity: 0.35,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the selection border stroke width
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    /// Set the hover highlight opacity
    pub fn with_hover_opacity(mut self, opacity: f64) -> Self {
        self.hover_opacity = opacity;
        self
    }
}
