//! TextMate theme input: the settings data model and plist loading.

mod matcher;

pub use matcher::*;

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors loading a TextMate theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The plist could not be read or deserialized.
    #[error("failed to read theme: {0}")]
    Plist(#[from] plist::Error),
}

/// A parsed `.tmTheme` document.
#[derive(Debug, Clone, Deserialize)]
pub struct TmTheme {
    /// Theme display name, if present.
    #[serde(default)]
    pub name: Option<String>,
    /// The ordered rule list.
    pub settings: Vec<ThemeRule>,
}

/// One entry of the theme's `settings` array: an optional scope selector and
/// a settings bag. The rule with no selector is the theme's global default.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRule {
    /// Human-readable rule name.
    #[serde(default)]
    pub name: Option<String>,
    /// Scope selector; possibly comma-separated into alternatives.
    #[serde(default)]
    pub scope: Option<String>,
    /// The styling payload.
    #[serde(default)]
    pub settings: ThemeSettings,
}

/// The styling payload of a theme rule. The editor-wide fields (caret,
/// selection, line highlight, invisibles) only appear on the global rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Foreground color (`#RRGGBB` or `#RRGGBBAA`).
    #[serde(default)]
    pub foreground: Option<String>,
    /// Background color.
    #[serde(default)]
    pub background: Option<String>,
    /// Space-separated style words (`bold`, `italic`, `underline`).
    #[serde(default)]
    pub font_style: Option<String>,
    /// Caret color (global rule only).
    #[serde(default)]
    pub caret: Option<String>,
    /// Selection background (global rule only).
    #[serde(default)]
    pub selection: Option<String>,
    /// Current-line highlight (global rule only).
    #[serde(default)]
    pub line_highlight: Option<String>,
    /// Whitespace/indent-guide color (global rule only).
    #[serde(default)]
    pub invisibles: Option<String>,
}

impl TmTheme {
    /// Load a theme from a binary or XML property-list file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        Ok(plist::from_file(path)?)
    }

    /// The global default rule: the one entry with no scope selector.
    pub fn default_rule(&self) -> Option<&ThemeRule> {
        find_by_scope(&self.settings, None)
    }
}
