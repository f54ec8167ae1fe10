//! `init` command: write a commented `head.toml` and a starter manifest.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{
    SiteConfig,
    section::site::{HeaderConfig, SeoConfig, SiteInfoConfig},
};
use crate::log;

/// Starter page manifest, written next to the config when absent.
const PAGES_FILE: &str = "pages.toml";

const PAGES_TEMPLATE: &str = r#"# Pages whose <head> is rendered by `tola-head render`
[[pages]]
title = "Home"
description = ""
url = "/"
"#;

/// Generate head.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# tola-head configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    out.push_str(&HeaderConfig::template_with_header());
    out.push('\n');

    out.push_str(&SeoConfig::template_with_header());

    out
}

/// Create the config file and a starter manifest.
///
/// Refuses to overwrite an existing config. An existing manifest is left alone.
pub fn run(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "'{}' already exists, remove it first to regenerate",
            path.display()
        );
    }

    fs::create_dir_all(config.get_root()).with_context(|| {
        format!("Failed to create directory '{}'", config.get_root().display())
    })?;
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log!("init"; "created {}", path.display());

    if write_pages_template(config.get_root())? {
        log!("init"; "created {}", config.root_join(PAGES_FILE).display());
    }

    Ok(())
}

/// Write the starter manifest, returning whether a file was created.
fn write_pages_template(root: &Path) -> Result<bool> {
    let path = root.join(PAGES_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, PAGES_TEMPLATE)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageManifest;
    use tempfile::TempDir;

    fn config_in(root: &Path) -> SiteConfig {
        SiteConfig {
            config_path: root.join("head.toml"),
            root: root.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_template_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site.info]"));
        assert!(template.contains("[site.header]"));
        assert!(template.contains("[site.seo]"));
    }

    #[test]
    fn test_run_writes_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog");
        run(&config_in(&root)).unwrap();

        assert!(root.join("head.toml").exists());
        let manifest = PageManifest::load(&root.join(PAGES_FILE)).unwrap();
        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.pages[0].title, "Home");
    }

    #[test]
    fn test_run_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("head.toml"), "# mine").unwrap();

        assert!(run(&config_in(temp.path())).is_err());
        let content = fs::read_to_string(temp.path().join("head.toml")).unwrap();
        assert_eq!(content, "# mine");
    }

    #[test]
    fn test_existing_manifest_kept() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PAGES_FILE), "pages = []").unwrap();

        run(&config_in(temp.path())).unwrap();
        let content = fs::read_to_string(temp.path().join(PAGES_FILE)).unwrap();
        assert_eq!(content, "pages = []");
    }
}
