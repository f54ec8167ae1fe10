//! Read-only view of the site config used during head assembly.

use crate::config::SiteConfig;

/// Site-wide inputs to head assembly, borrowed from [`SiteConfig`].
///
/// Built once per render run and shared by every page. Nothing here is
/// mutated while heads are assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteContext<'a> {
    /// Site name (`og:site_name`).
    pub name: &'a str,
    pub author: &'a str,
    /// Absolute site URL, if configured.
    pub url: Option<&'a str>,
    pub language: &'a str,
    pub favicon: Option<&'a str>,
    pub built_in_icons: bool,
    pub syntax_highlighters: &'a [String],
    /// Raw custom stylesheet names, before case folding and dedup.
    pub custom_styles: &'a [String],
    pub social_tags: bool,
    pub twitter_card: &'a str,
}

impl<'a> SiteContext<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        let site = &config.site;
        Self {
            name: &site.info.title,
            author: &site.info.author,
            url: site.info.url.as_deref(),
            language: &site.info.language,
            favicon: site.header.icon.as_deref(),
            built_in_icons: site.header.builtin_icons,
            syntax_highlighters: &site.header.syntax_highlighters,
            custom_styles: &site.header.styles,
            social_tags: site.seo.social_tags,
            twitter_card: &site.seo.twitter_card,
        }
    }

    #[inline]
    pub fn has_syntax_highlighters(&self) -> bool {
        !self.syntax_highlighters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_from_config() {
        let config = test_parse_config(
            r#"author = "Alice"
url = "https://example.com"
[site.header]
icon = "/favicon.ico"
builtin_icons = true
syntax_highlighters = ["rust"]
styles = ["Theme"]
[site.seo]
social_tags = false"#,
        );
        let site = SiteContext::from_config(&config);

        assert_eq!(site.name, "Test");
        assert_eq!(site.author, "Alice");
        assert_eq!(site.url, Some("https://example.com"));
        assert_eq!(site.language, "en");
        assert_eq!(site.favicon, Some("/favicon.ico"));
        assert!(site.built_in_icons);
        assert!(site.has_syntax_highlighters());
        assert_eq!(site.custom_styles, ["Theme"]);
        assert!(!site.social_tags);
        assert_eq!(site.twitter_card, "summary_large_image");
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        let site = SiteContext::from_config(&config);
        assert!(site.favicon.is_none());
        assert!(!site.has_syntax_highlighters());
        assert!(site.custom_styles.is_empty());
        assert!(site.social_tags);
    }
}
