//! Page descriptors and the page manifest.
//!
//! A manifest lists the pages whose heads should be rendered:
//!
//! ```toml
//! [[pages]]
//! title = "Hello"
//! description = "First post"
//! url = "https://example.com/posts/hello/"
//! image = "/images/hello.png"
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::log;

/// What the head assembler needs to know about a page.
///
/// `title` must be non-empty; [`PageManifest::load`] enforces this before
/// any head is assembled. `description` and `url` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDescriptor {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Cover image for social cards (absolute URL or root-relative path).
    pub image: Option<String>,
}

impl PageDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Ordered list of pages from `pages.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageManifest {
    pub pages: Vec<PageDescriptor>,
}

impl PageManifest {
    /// Read and check a manifest file, warning about unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page manifest '{}'", path.display()))?;
        let (manifest, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Invalid page manifest '{}'", path.display()))?;

        if !ignored.is_empty() {
            log!("warning"; "unknown keys in {}, ignoring:", path.display());
            for key in &ignored {
                eprintln!("- {}", key);
            }
        }
        if manifest.pages.is_empty() {
            log!("warning"; "no pages in {}", path.display());
        }

        Ok(manifest)
    }

    /// Parse manifest content, collecting unknown keys and rejecting pages
    /// without a title.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let manifest: Self = serde_ignored::deserialize(
            toml::Deserializer::new(content),
            |path: serde_ignored::Path| ignored.push(path.to_string()),
        )?;

        let untitled: Vec<_> = manifest
            .pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.title.is_empty())
            .map(|(i, page)| format!("#{} ({})", i + 1, display_url(&page.url)))
            .collect();

        if !untitled.is_empty() {
            bail!("pages without title: {}", untitled.join(", "));
        }

        Ok((manifest, ignored))
    }
}

fn display_url(url: &str) -> &str {
    if url.is_empty() { "no url" } else { url }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pages() {
        let (manifest, ignored) = PageManifest::parse_with_ignored(
            r#"
[[pages]]
title = "Home"
url = "https://example.com/"

[[pages]]
title = "Post"
description = "A post"
url = "https://example.com/post/"
image = "/img/post.png"
"#,
        )
        .unwrap();

        assert!(ignored.is_empty());
        assert_eq!(manifest.pages.len(), 2);
        assert_eq!(manifest.pages[0].title, "Home");
        assert!(manifest.pages[0].description.is_empty());
        assert!(manifest.pages[0].image.is_none());
        assert_eq!(manifest.pages[1].image.as_deref(), Some("/img/post.png"));
    }

    #[test]
    fn test_reject_untitled() {
        let err = PageManifest::parse_with_ignored(
            r#"
[[pages]]
title = "Ok"

[[pages]]
url = "/missing/"
"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("#2"));
        assert!(message.contains("/missing/"));
    }

    #[test]
    fn test_empty_manifest() {
        let (manifest, _) = PageManifest::parse_with_ignored("").unwrap();
        assert!(manifest.pages.is_empty());
    }

    #[test]
    fn test_misspelled_key_reported() {
        let (manifest, ignored) =
            PageManifest::parse_with_ignored("[[pages]]\ntitle = \"T\"\ndescripton = \"lost\"")
                .unwrap();
        assert!(manifest.pages[0].description.is_empty());
        assert_eq!(ignored, ["pages.0.descripton"]);
    }

    #[test]
    fn test_load_with_unknown_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[pages]]\ntitle = \"T\"\nimgae = \"/x.png\"").unwrap();

        let manifest = PageManifest::load(file.path()).unwrap();
        assert_eq!(manifest.pages.len(), 1);
        assert!(manifest.pages[0].image.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[pages]]\ntitle = \"From disk\"").unwrap();

        let manifest = PageManifest::load(file.path()).unwrap();
        assert_eq!(manifest.pages[0].title, "From disk");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageManifest::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_builder_methods() {
        let page = PageDescriptor::new("T")
            .with_description("d")
            .with_url("/t/")
            .with_image("/i.png");
        assert_eq!(page.title, "T");
        assert_eq!(page.description, "d");
        assert_eq!(page.url, "/t/");
        assert_eq!(page.image.as_deref(), Some("/i.png"));
    }
}
