//! Configuration to acknowledge maintainer preferences as well as set defaults.
//!
//! Specifically, we try to find an hne-viewer.toml, and if present we load settings from there.
//! This provides the input and output locations and the label given to the guide's root section.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when no other is given.
pub const DEFAULT_CONFIG_PATH: &str = "hne-viewer.toml";
/// Source document read by default.
pub const DEFAULT_INPUT_PATH: &str = "HNE Grossing Guide TEMPLATES.docx";
/// Standalone JSON written by default.
pub const DEFAULT_JSON_PATH: &str = "hne_grossing_guide.json";
/// Viewer page rewritten by default.
pub const DEFAULT_HTML_PATH: &str = "hne_viewer.html";
/// Title of the synthetic root section.
pub const DEFAULT_ROOT_TITLE: &str = "HNE Grossing Guide";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Run settings loaded from hne-viewer.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_INPUT_PATH.to_string())]
    /// Heading-structured DOCX to read.
    pub input_path: String,
    #[facet(default = DEFAULT_JSON_PATH.to_string())]
    /// Where the indented JSON tree is written.
    pub json_path: String,
    #[facet(default = DEFAULT_HTML_PATH.to_string())]
    /// Existing viewer page whose data element is rewritten.
    pub html_path: String,
    #[facet(default = DEFAULT_ROOT_TITLE.to_string())]
    /// Label for the section holding everything before the first heading.
    pub root_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            json_path: DEFAULT_JSON_PATH.to_string(),
            html_path: DEFAULT_HTML_PATH.to_string(),
            root_title: DEFAULT_ROOT_TITLE.to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from hne-viewer.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
            Self::default()
        })
    }

    /// Parse TOML settings, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the TOML is invalid.
    pub fn parse(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
