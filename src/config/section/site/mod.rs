//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Blog"
//! author = "Alice"
//! url = "https://myblog.com"
//!
//! [site.header]
//! icon = "/favicon.ico"
//! builtin_icons = true
//! syntax_highlighters = ["rust"]
//! styles = ["theme"]
//!
//! [site.seo]
//! social_tags = true
//! ```

mod header;
mod info;
mod seo;

pub use header::{ColorScheme, HeaderConfig, LinkEntry, MetaEntry};
pub use info::SiteInfoConfig;
pub use seo::SeoConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration containing info, header, and seo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, url, language)
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Optional `<head>` entries (favicon, icons, styles, extras).
    #[config(sub)]
    pub header: HeaderConfig,

    /// Social sharing tags.
    #[config(sub)]
    pub seo: SeoConfig,
}
