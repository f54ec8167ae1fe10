//! Configuration section definitions.
//!
//! | Module | TOML Section | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | `site` | `[site]`     | Site info, header entries, seo       |

pub mod site;

pub use site::SiteSectionConfig;
