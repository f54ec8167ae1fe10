//! Metadata elements that may appear inside `<head>`.
//!
//! Each variant captures everything it needs to render itself, so rendering
//! never consults the site config or the page again.
//!
//! | Variant    | Markup                                              |
//! |------------|-----------------------------------------------------|
//! | `Charset`  | `<meta charset="utf-8">`                            |
//! | `Viewport` | `<meta name="viewport" content="...">`              |
//! | `Named`    | `<meta name="..." content="...">`                   |
//! | `Property` | `<meta property="..." content="...">`               |
//! | `Link`     | `<link rel="..." href="...">`                       |
//! | `Title`    | `<title>...</title>`                                |

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::utils::html::{escape, escape_attr};

/// Content of the responsive viewport declaration.
pub const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1";

/// Relation of a `<link>` element to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkRel {
    Stylesheet,
    Icon,
    Canonical,
    AlternateStylesheet,
    Alternate,
}

impl LinkRel {
    /// Value of the `rel` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Icon => "icon",
            Self::Canonical => "canonical",
            Self::AlternateStylesheet => "alternate stylesheet",
            Self::Alternate => "alternate",
        }
    }
}

impl fmt::Display for LinkRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single metadata declaration.
///
/// Equality and hashing are structural: two elements with the same kind and
/// fields are interchangeable.
///
/// # Preconditions
///
/// `Named::name` and `Property::property` must be non-empty. Nothing checks
/// this at runtime; an empty name renders as `name=""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaElement {
    /// `<meta charset="utf-8">`
    Charset,
    /// `<meta name="viewport">` with [`VIEWPORT_CONTENT`].
    Viewport,
    /// `<meta name content>`
    Named { name: String, content: String },
    /// `<meta property content>`, as used by Open Graph.
    Property { property: String, content: String },
    /// `<link rel href>`
    Link { href: String, rel: LinkRel },
    /// `<title>`
    Title { text: String },
}

impl MetaElement {
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    pub fn link(href: impl Into<String>, rel: LinkRel) -> Self {
        Self::Link {
            href: href.into(),
            rel,
        }
    }

    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::link(href, LinkRel::Stylesheet)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    /// Short kind label, e.g. `meta:description` or `link:canonical`.
    ///
    /// Used by `--verbose` logging and ordering assertions.
    pub fn kind(&self) -> String {
        match self {
            Self::Charset => "charset".into(),
            Self::Viewport => "viewport".into(),
            Self::Named { name, .. } => format!("meta:{name}"),
            Self::Property { property, .. } => format!("property:{property}"),
            Self::Link { rel, .. } => format!("link:{}", rel.as_str()),
            Self::Title { .. } => "title".into(),
        }
    }

    /// Render this element to HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    /// Append the rendered element to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Charset => out.write_str(r#"<meta charset="utf-8">"#),
            Self::Viewport => {
                write!(out, r#"<meta name="viewport" content="{VIEWPORT_CONTENT}">"#)
            }
            Self::Named { name, content } => write!(
                out,
                r#"<meta name="{}" content="{}">"#,
                escape_attr(name),
                escape_attr(content)
            ),
            Self::Property { property, content } => write!(
                out,
                r#"<meta property="{}" content="{}">"#,
                escape_attr(property),
                escape_attr(content)
            ),
            Self::Link { href, rel } => write!(
                out,
                r#"<link rel="{}" href="{}">"#,
                rel.as_str(),
                escape_attr(href)
            ),
            Self::Title { text } => write!(out, "<title>{}</title>", escape(text)),
        }
    }
}

impl fmt::Display for MetaElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
