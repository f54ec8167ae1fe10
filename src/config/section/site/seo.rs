//! `[site.seo]` configuration (social sharing tags).

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Social sharing settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.seo")]
pub struct SeoConfig {
    #[config(default = "true", inline_doc = "Append Open Graph and Twitter Card tags")]
    pub social_tags: bool,

    #[config(
        default = "summary_large_image",
        inline_doc = "Twitter card type: summary | summary_large_image"
    )]
    pub twitter_card: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            social_tags: true,
            twitter_card: "summary_large_image".into(),
        }
    }
}

impl SeoConfig {
    /// `twitter_card` must be set while social tags are on.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.social_tags && self.twitter_card.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.twitter_card,
                "twitter_card is empty",
                "use \"summary\" or \"summary_large_image\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.site.seo.social_tags);
        assert_eq!(config.site.seo.twitter_card, "summary_large_image");
    }

    #[test]
    fn test_disable_social_tags() {
        let config = test_parse_config("[site.seo]\nsocial_tags = false\ntwitter_card = \"summary\"");
        assert!(!config.site.seo.social_tags);
        assert_eq!(config.site.seo.twitter_card, "summary");
    }

    #[test]
    fn test_empty_twitter_card_rejected() {
        let config = test_parse_config("[site.seo]\ntwitter_card = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.seo.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.seo.twitter_card");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_twitter_card_ignored_when_disabled() {
        let config = test_parse_config("[site.seo]\nsocial_tags = false\ntwitter_card = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.seo.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
