//! `render` command: assemble and print the `<head>` of every manifest page.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::RenderArgs;
use crate::config::{SiteConfig, section::site::HeaderConfig};
use crate::head::{Head, HeadBuilder, MetaElement, SiteContext};
use crate::page::{PageDescriptor, PageManifest};
use crate::{debug, log, logger::ProgressLine};

/// One rendered page in `--json` output.
#[derive(Debug, Serialize)]
struct RenderedPage<'a> {
    url: &'a str,
    title: &'a str,
    head: String,
}

pub fn run(config: &SiteConfig, args: &RenderArgs) -> Result<()> {
    let manifest = PageManifest::load(&config.root_join(&args.pages))?;
    let heads = render_pages(config, &manifest.pages, args.output.is_some());
    let output = format_output(&manifest.pages, heads, args)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        if let Some(ref output) = output {
            writeln!(file, "{}", output)?;
        }
        log!("render"; "wrote {} heads to {}", manifest.pages.len(), output_path.display());
    } else if let Some(output) = output {
        println!("{}", output);
    }

    Ok(())
}

/// Text output is one head per line and absent for an empty manifest.
/// JSON output is always a complete array, `[]` included.
fn format_output(
    pages: &[PageDescriptor],
    heads: Vec<String>,
    args: &RenderArgs,
) -> Result<Option<String>> {
    if args.json {
        format_json(pages, heads, args.pretty).map(Some)
    } else if heads.is_empty() {
        Ok(None)
    } else {
        Ok(Some(heads.join("\n")))
    }
}

/// Render every page in parallel, preserving manifest order.
fn render_pages(config: &SiteConfig, pages: &[PageDescriptor], progress: bool) -> Vec<String> {
    let site = SiteContext::from_config(config);
    let header = &config.site.header;
    let progress = progress.then(|| ProgressLine::new("render", &[("pages", pages.len())]));

    let heads = pages
        .par_iter()
        .map(|page| {
            let head = Head::for_page(page, &site, |head| configured_extras(head, header));
            debug!("render"; "{} ({} elements)", page.url, head.len());
            if let Some(ref progress) = progress {
                progress.inc("pages");
            }
            head.render()
        })
        .collect();

    if let Some(progress) = progress {
        progress.finish();
    }
    heads
}

/// Extras from `[site.header]`: color scheme, then `meta`, then `links`.
fn configured_extras(head: &mut HeadBuilder, header: &HeaderConfig) {
    head.push_some(
        header
            .color_scheme
            .meta_content()
            .map(|scheme| MetaElement::named("color-scheme", scheme)),
    );
    head.extend(
        header
            .meta
            .iter()
            .map(|entry| MetaElement::named(&entry.name, &entry.content)),
    );
    head.extend(
        header
            .links
            .iter()
            .map(|entry| MetaElement::link(&entry.href, entry.rel)),
    );
}

fn format_json(pages: &[PageDescriptor], heads: Vec<String>, pretty: bool) -> Result<String> {
    let rendered: Vec<_> = pages
        .iter()
        .zip(heads)
        .map(|(page, head)| RenderedPage {
            url: &page.url,
            title: &page.title,
            head,
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&rendered)?
    } else {
        serde_json::to_string(&rendered)?
    };
    Ok(json)
}
