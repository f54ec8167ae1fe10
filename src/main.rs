//! tola-head - Document head assembly for static sites.

#![allow(dead_code)]

mod cli;
mod config;
mod head;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Render { args } = &cli.command {
        logger::set_verbose(args.verbose);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::run(&config),
        Commands::Render { args } => cli::render::run(&config, args),
    }
}
