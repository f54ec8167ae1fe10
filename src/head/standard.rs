//! Standard headers every page receives.
//!
//! The emission order is part of the output contract:
//!
//! | #  | Element                          | Condition                    |
//! |----|----------------------------------|------------------------------|
//! | 1  | `<meta charset>`                 | always                       |
//! | 2  | `<meta name="viewport">`         | always                       |
//! | 3  | `<meta name="description">`      | page description non-empty   |
//! | 4  | `<meta name="author">`           | site author non-empty        |
//! | 5  | `<meta name="generator">`        | always                       |
//! | 6  | `<title>`                        | always                       |
//! | 7  | main stylesheet                  | always                       |
//! | 8  | highlight stylesheet             | any syntax highlighter       |
//! | 9  | icon font stylesheet             | built-in icons enabled       |
//! | 10 | `/css/<name>.css` per style      | after fold/dedup, sorted     |
//! | 11 | `<link rel="canonical">`         | always, even with empty url  |
//! | 12 | `<link rel="icon">`              | favicon configured           |

use rustc_hash::FxHashSet;

use super::{HeadBuilder, LinkRel, MetaElement, SiteContext};
use crate::page::PageDescriptor;

/// Main site stylesheet.
pub const STANDARD_CSS: &str = "/css/main.min.css";
/// Syntax highlighting theme.
pub const HIGHLIGHT_CSS: &str = "/css/highlight.min.css";
/// Built-in icon font.
pub const ICONS_CSS: &str = "/css/icons.min.css";
/// Content of `<meta name="generator">`.
pub const GENERATOR: &str = concat!("tola-head v", env!("CARGO_PKG_VERSION"));

/// Build the standard header sequence for `page`.
pub fn standard_headers(page: &PageDescriptor, site: &SiteContext<'_>) -> Vec<MetaElement> {
    HeadBuilder::collect(|head| {
        head.push(MetaElement::Charset);
        head.push(MetaElement::Viewport);

        head.push_if(!page.description.is_empty(), || {
            MetaElement::named("description", &page.description)
        });
        head.push_if(!site.author.is_empty(), || {
            MetaElement::named("author", site.author)
        });

        head.push(MetaElement::named("generator", GENERATOR));
        head.push(MetaElement::title(&page.title));

        head.push(MetaElement::stylesheet(STANDARD_CSS));
        head.push_if(site.has_syntax_highlighters(), || {
            MetaElement::stylesheet(HIGHLIGHT_CSS)
        });
        head.push_if(site.built_in_icons, || MetaElement::stylesheet(ICONS_CSS));

        head.extend(
            custom_stylesheet_names(site.custom_styles)
                .into_iter()
                .map(|name| MetaElement::stylesheet(format!("/css/{name}.css"))),
        );

        head.push(MetaElement::link(&page.url, LinkRel::Canonical));
        head.push_some(site.favicon.map(|icon| MetaElement::link(icon, LinkRel::Icon)));
    })
}

/// Case-fold, deduplicate and drop empty stylesheet names.
///
/// The set has no order of its own, so the result is sorted ascending to
/// keep output byte-identical across runs.
pub fn custom_stylesheet_names(names: &[String]) -> Vec<String> {
    let unique: FxHashSet<String> = names
        .iter()
        .map(|name| name.to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn kinds(items: &[MetaElement]) -> Vec<String> {
        items.iter().map(MetaElement::kind).collect()
    }

    fn stylesheet_hrefs(items: &[MetaElement]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|item| match item {
                MetaElement::Link {
                    href,
                    rel: LinkRel::Stylesheet,
                } => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_minimal_page() {
        let page = PageDescriptor::new("Home");
        let items = standard_headers(&page, &SiteContext::default());

        assert_eq!(
            kinds(&items),
            [
                "charset",
                "viewport",
                "meta:generator",
                "title",
                "link:stylesheet",
                "link:canonical"
            ]
        );
        assert_eq!(items[3], MetaElement::title("Home"));
    }

    #[test]
    fn test_description_inclusion() {
        let site = SiteContext::default();

        let without = standard_headers(&PageDescriptor::new("T"), &site);
        assert!(!kinds(&without).contains(&"meta:description".to_string()));

        let page = PageDescriptor::new("T").with_description("x");
        let with = standard_headers(&page, &site);
        let descriptions: Vec<_> = with
            .iter()
            .filter(|item| item.kind() == "meta:description")
            .collect();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0].render(), r#"<meta name="description" content="x">"#);
    }

    #[test]
    fn test_description_and_author_before_generator() {
        let page = PageDescriptor::new("T").with_description("d");
        let site = SiteContext {
            author: "Alice",
            ..Default::default()
        };
        let kinds = kinds(&standard_headers(&page, &site));
        let pos = |kind: &str| kinds.iter().position(|k| k == kind).unwrap();

        assert!(pos("meta:description") < pos("meta:author"));
        assert!(pos("meta:author") < pos("meta:generator"));
        assert!(pos("meta:generator") < pos("title"));
    }

    #[test]
    fn test_custom_styles_dedup() {
        let styles = strings(&["Foo", "foo", "", "bar"]);
        let site = SiteContext {
            custom_styles: &styles,
            ..Default::default()
        };
        let items = standard_headers(&PageDescriptor::new("T"), &site);

        assert_eq!(
            stylesheet_hrefs(&items),
            [STANDARD_CSS, "/css/bar.css", "/css/foo.css"]
        );
    }

    #[test]
    fn test_custom_styles_order_independent() {
        let forward = custom_stylesheet_names(&strings(&["Foo", "foo", "", "bar"]));
        let backward = custom_stylesheet_names(&strings(&["bar", "", "foo", "Foo"]));
        assert_eq!(forward, ["bar", "foo"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_custom_styles_empty() {
        assert!(custom_stylesheet_names(&[]).is_empty());
        assert!(custom_stylesheet_names(&strings(&["", ""])).is_empty());

        let empty_names = strings(&[""]);
        let site = SiteContext {
            custom_styles: &empty_names,
            ..Default::default()
        };
        let items = standard_headers(&PageDescriptor::new("T"), &site);
        assert_eq!(stylesheet_hrefs(&items), [STANDARD_CSS]);
        assert!(!items.iter().any(|item| item.render().contains("/css/.css")));
    }

    #[test]
    fn test_favicon_optional_and_last() {
        let page = PageDescriptor::new("T");

        let without = standard_headers(&page, &SiteContext::default());
        assert!(!without.iter().any(|item| item.kind() == "link:icon"));

        let site = SiteContext {
            favicon: Some("/f.ico"),
            ..Default::default()
        };
        let with = standard_headers(&page, &site);
        let icons: Vec<_> = with.iter().filter(|item| item.kind() == "link:icon").collect();
        assert_eq!(icons.len(), 1);
        assert_eq!(with.last(), Some(&MetaElement::link("/f.ico", LinkRel::Icon)));
    }

    #[test]
    fn test_canonical_always_present() {
        for url in ["", "https://example.com/post/"] {
            let page = PageDescriptor::new("T").with_url(url);
            let items = standard_headers(&page, &SiteContext::default());
            let canonical: Vec<_> = items
                .iter()
                .filter(|item| item.kind() == "link:canonical")
                .collect();
            assert_eq!(canonical, [&MetaElement::link(url, LinkRel::Canonical)]);
        }
    }

    #[test]
    fn test_feature_stylesheets() {
        let highlighters = strings(&["rust"]);
        let site = SiteContext {
            syntax_highlighters: &highlighters,
            built_in_icons: true,
            ..Default::default()
        };
        let items = standard_headers(&PageDescriptor::new("T"), &site);
        assert_eq!(
            stylesheet_hrefs(&items),
            [STANDARD_CSS, HIGHLIGHT_CSS, ICONS_CSS]
        );
    }

    #[test]
    fn test_generator_content() {
        let items = standard_headers(&PageDescriptor::new("T"), &SiteContext::default());
        assert!(items.contains(&MetaElement::named("generator", GENERATOR)));
        assert!(GENERATOR.starts_with("tola-head v"));
    }
}
