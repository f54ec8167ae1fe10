//! Open Graph and Twitter Card meta tags.
//!
//! Appended after the standard headers. Emission order:
//!
//! ```text
//! og:site_name, og:type, og:locale,
//! og:image, twitter:image,
//! og:title, twitter:title,
//! og:description, twitter:description,
//! og:url, twitter:domain, twitter:card, twitter:dnt
//! ```

use crate::head::{HeadBuilder, MetaElement, SiteContext};
use crate::page::PageDescriptor;

/// Open Graph object type for every page.
const OG_TYPE: &str = "website";

/// Social sharing tags for `page`, empty when disabled in config.
pub fn social_sharing_tags(page: &PageDescriptor, site: &SiteContext<'_>) -> Vec<MetaElement> {
    if !site.social_tags {
        return Vec::new();
    }

    HeadBuilder::collect(|head| {
        head.push_if(!site.name.is_empty(), || {
            MetaElement::property("og:site_name", site.name)
        });
        head.push(MetaElement::property("og:type", OG_TYPE));
        head.push_if(!site.language.is_empty(), || {
            MetaElement::property("og:locale", og_locale(site.language))
        });

        if let Some(image) = page.image.as_deref().filter(|image| !image.is_empty()) {
            let image = absolute_url(image, site.url);
            head.push(MetaElement::property("og:image", image.clone()));
            head.push(MetaElement::named("twitter:image", image));
        }

        head.push(MetaElement::property("og:title", &page.title));
        head.push(MetaElement::named("twitter:title", &page.title));

        if !page.description.is_empty() {
            head.push(MetaElement::property("og:description", &page.description));
            head.push(MetaElement::named("twitter:description", &page.description));
        }

        head.push_if(!page.url.is_empty(), || {
            MetaElement::property("og:url", &page.url)
        });
        head.push_some(
            site.url
                .and_then(twitter_domain)
                .map(|domain| MetaElement::named("twitter:domain", domain)),
        );
        head.push(MetaElement::named("twitter:card", site.twitter_card));
        head.push(MetaElement::named("twitter:dnt", "on"));
    })
}

/// Open Graph locales use `_` where language tags use `-`.
fn og_locale(language: &str) -> String {
    language.replace('-', "_")
}

/// Prefix a root-relative path with the site URL.
///
/// Absolute URLs, relative paths and sites without a URL pass through.
fn absolute_url(path: &str, site_url: Option<&str>) -> String {
    match site_url {
        Some(base) if path.starts_with('/') && !path.starts_with("//") => {
            format!("{}{}", base.trim_end_matches('/'), path)
        }
        _ => path.to_string(),
    }
}

/// Host of the site URL without a leading `www.`.
fn twitter_domain(site_url: &str) -> Option<String> {
    let parsed = url::Url::parse(site_url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
