//! Stylesheet support for link colors
//!
//! Maps the handful of color roles a link needs (default fill, selection
//! border, hover highlight) to concrete values. Hosts can load their own
//! palette from TOML; anything missing falls back to the built-in palette
//! so a link always has a drawable color.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping link color roles to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: role name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in palette: blue links, black selection border, amber hover
/// highlight.
const DEFAULT_PALETTE: &str = r##"
[colors]
# Arrow fill used when a link record carries no color of its own
link = "#2196f3"

# Stroke drawn around the arrow while the link is selected
selection-stroke = "#000000"

# Highlight drawn on top of the arrow while the pointer hovers it
hover-overlay = "#ff9800"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a color role to a concrete value
    ///
    /// Returns None if the role is not defined in this stylesheet.
    pub fn resolve(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(|s| s.as_str())
    }

    /// Resolve a color role with fallback to the built-in palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for the exact role
    /// 2. Check the built-in palette for the exact role
    /// 3. Use dark gray for anything unknown
    pub fn resolve_or_default(&self, role: &str) -> String {
        if let Some(color) = self.resolve(role) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(role) {
            return color.to_string();
        }

        "#333333".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Built-in palette should be valid TOML")
    }
}
