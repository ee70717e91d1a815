//! Command-line interface definitions.
//!
//! Every argument is optional: `langpage` alone builds the site in the
//! current directory.

use clap::Parser;
use std::path::PathBuf;

/// Render one localized page per language from a single html template
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root. Defaults apply when it is missing
    #[arg(short = 'C', long, default_value = "langpage.toml")]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
