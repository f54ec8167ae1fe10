//! `[site.header]` configuration.
//!
//! Controls which optional entries the standard headers contain, plus extra
//! `<meta>`/`<link>` elements appended after the social tags.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::head::LinkRel;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.header")]
pub struct HeaderConfig {
    /// Favicon URL or root-relative path.
    #[config(inline_doc = "Favicon, e.g. \"/favicon.ico\"")]
    pub icon: Option<String>,

    /// Link the bundled icon font stylesheet.
    #[config(inline_doc = "Enable built-in icons")]
    pub builtin_icons: bool,

    /// Languages highlighted in code blocks.
    /// The highlight stylesheet is linked when this is non-empty.
    #[config(inline_doc = "Syntax highlighter languages")]
    pub syntax_highlighters: Vec<String>,

    /// Custom stylesheet names, served from `/css/<name>.css`.
    /// Names are case-insensitive; duplicates and empty names are dropped.
    #[config(inline_doc = "Custom stylesheet names")]
    pub styles: Vec<String>,

    /// Preferred color scheme: auto | light | dark
    #[config(default = "auto", status = experimental)]
    pub color_scheme: ColorScheme,

    /// Extra `<meta name content>` elements.
    pub meta: Vec<MetaEntry>,

    /// Extra `<link rel href>` elements.
    pub links: Vec<LinkEntry>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            icon: None,
            builtin_icons: false,
            syntax_highlighters: Vec::new(),
            styles: Vec::new(),
            color_scheme: ColorScheme::Auto,
            meta: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl HeaderConfig {
    /// Validate header entries.
    ///
    /// # Checks
    /// - `icon` must not be empty when set
    /// - `styles` entries are bare names (no `/`, no `.css` suffix in any
    ///   case, not blank); an empty string is allowed and dropped
    /// - `meta` entries need a name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.icon.as_deref().is_some_and(|icon| icon.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.icon,
                "icon is set but empty",
                "remove the field or set it, e.g.: \"/favicon.ico\"",
            );
        }

        for style in &self.styles {
            if !style.is_empty() && style.trim().is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.styles,
                    format!("'{style}' is blank"),
                    "remove the entry",
                );
            } else if style.contains('/') {
                diag.error_with_hint(
                    Self::FIELDS.styles,
                    format!("'{style}' looks like a path"),
                    "use a bare name, it is served from /css/<name>.css",
                );
            } else if style.to_ascii_lowercase().ends_with(".css") {
                // The suffix is ASCII, so the cut lands on a char boundary.
                let stem = &style[..style.len() - ".css".len()];
                diag.error_with_hint(
                    Self::FIELDS.styles,
                    format!("'{style}' includes the .css extension"),
                    format!("use \"{stem}\""),
                );
            }
        }

        for entry in &self.meta {
            if entry.name.is_empty() {
                diag.error(
                    Self::FIELDS.meta,
                    format!("meta entry with content '{}' has no name", entry.content),
                );
            }
        }
    }
}

// ============================================================================
// Entry Types
// ============================================================================

/// Color scheme hint for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the browser; no hint is emitted.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    /// Value for `<meta name="color-scheme">`, `None` for `auto`.
    pub const fn meta_content(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub href: String,
    #[serde(default = "default_link_rel")]
    pub rel: LinkRel,
}

const fn default_link_rel() -> LinkRel {
    LinkRel::Stylesheet
}
