//! langpage - render one localized static page per language.

mod build;
mod cli;
mod config;
mod footer;
mod logger;
mod render;
mod translation;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Load config and build every language. Any error aborts the run.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let footer = config.footer();
    build_site(&config, &footer).map(|_| ())
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; the built-in defaults are used.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
