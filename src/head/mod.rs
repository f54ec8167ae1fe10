//! Document head assembly and rendering.
//!
//! ```text
//! PageDescriptor + SiteContext
//!         │
//!         ├── standard_headers()      charset … canonical, favicon
//!         ├── social_sharing_tags()   og:*, twitter:*
//!         └── additional block        caller extras
//!         ▼
//!       Head ──render()──▶ "<head>…</head>"
//! ```
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `element`  | `MetaElement` sum type and its markup           |
//! | `builder`  | `HeadBuilder` ordered collector                 |
//! | `standard` | Standard header policy                          |
//! | `context`  | `SiteContext` borrowed from the site config     |

mod builder;
mod context;
mod element;
pub mod standard;

pub use builder::HeadBuilder;
pub use context::SiteContext;
pub use element::{LinkRel, MetaElement};
pub use standard::standard_headers;

use std::fmt;

use crate::page::PageDescriptor;
use crate::seo::social_sharing_tags;

/// The `<head>` of one rendered page.
///
/// Built once per page and never modified after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    items: Vec<MetaElement>,
}

impl Head {
    /// Build a head from an arbitrary builder block.
    pub fn new(block: impl FnOnce(&mut HeadBuilder)) -> Self {
        Self::from_items(HeadBuilder::collect(block))
    }

    pub fn from_items(items: Vec<MetaElement>) -> Self {
        Self { items }
    }

    /// Standard head for `page`: standard headers, then social sharing tags,
    /// then whatever `additional` pushes.
    pub fn for_page(
        page: &PageDescriptor,
        site: &SiteContext<'_>,
        additional: impl FnOnce(&mut HeadBuilder),
    ) -> Self {
        let standard = standard_headers(page, site);
        let social = social_sharing_tags(page, site);
        let extra = HeadBuilder::collect(additional);

        let mut items = Vec::with_capacity(standard.len() + social.len() + extra.len());
        items.extend(standard);
        items.extend(social);
        items.extend(extra);

        Self { items }
    }

    pub fn items(&self) -> &[MetaElement] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render as `<head>` followed by every item in order, then `</head>`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<head>")?;
        for item in &self.items {
            item.write_to(f)?;
        }
        f.write_str("</head>")
    }
}
