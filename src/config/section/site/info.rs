//! `[site.info]` configuration.
//!
//! Basic site identity used by the standard headers and social tags.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site name, used for `og:site_name`.
    #[config(inline_doc = "Site name")]
    pub title: String,

    /// Author name, emitted as `<meta name="author">` when set.
    #[config(inline_doc = "Author name")]
    pub author: String,

    /// Site URL (e.g., "https://example.com/blog").
    /// Root-relative page images are resolved against it.
    #[config(inline_doc = "Site URL")]
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans"), used for `og:locale`.
    #[config(default = "en", inline_doc = "Language code")]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site info.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
