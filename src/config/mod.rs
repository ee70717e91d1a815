//! Site configuration management for `langpage.toml`.
//!
//! The file is optional. Without it every value falls back to its default,
//! which renders seven languages (`en` as default) from `template.html` and
//! `translations/*.json` into the project root.
//!
//! # Sections
//!
//! | Section         | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `[site]`        | Footer organization and optional pinned year   |
//! | `[build]`       | Template, translations and output locations    |
//! | `[[languages]]` | Ordered language codes, exactly one default    |
//!
//! # Example
//!
//! ```toml
//! [site]
//! organization = "Cheese Wheels Apps OU"
//!
//! [build]
//! template = "template.html"
//! translations = "translations"
//! output = "public"
//!
//! [[languages]]
//! code = "en"
//! default = true
//!
//! [[languages]]
//! code = "fr"
//! ```

mod build;
pub mod defaults;
mod error;
mod language;
mod site;

pub use error::ConfigError;
pub use language::Language;

use build::BuildSection;
use site::SiteSection;

use crate::{cli::Cli, footer::Footer};
use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

/// Root configuration structure representing langpage.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Footer settings
    #[serde(default)]
    pub site: SiteSection,

    /// Input and output paths
    #[serde(default)]
    pub build: BuildSection,

    /// Languages in build order
    #[serde(default = "defaults::languages::list")]
    #[educe(Default = defaults::languages::list())]
    pub languages: Vec<Language>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// The language written to the output root, if configured.
    pub fn default_language(&self) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.default)
    }

    /// Footer for this run: the pinned `[site].year`, or the current year.
    pub fn footer(&self) -> Footer {
        let organization = self.site.organization.clone();
        match self.site.year {
            Some(year) => Footer::new(year, organization),
            None => Footer::current(organization),
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.template = Self::normalize_path(&root.join(&self.build.template));
        self.build.translations = Self::normalize_path(&root.join(&self.build.translations));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the language list and output file name
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!(ConfigError::Validation(
                "[[languages]] must have at least one entry".into()
            ));
        }

        let defaults = self.languages.iter().filter(|lang| lang.default).count();
        if defaults != 1 {
            bail!(ConfigError::Validation(format!(
                "[[languages]] must have exactly one default, found {defaults}"
            )));
        }

        let mut seen = HashSet::new();
        for lang in &self.languages {
            if !lang.has_valid_code() {
                bail!(ConfigError::Validation(format!(
                    "[[languages]] code `{}` may only contain ASCII letters, digits, `-` and `_`",
                    lang.code
                )));
            }
            if !seen.insert(lang.code.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "[[languages]] code `{}` is listed more than once",
                    lang.code
                )));
            }
        }

        let mut components = self.build.filename.components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            bail!(ConfigError::Validation(format!(
                "[build.filename] `{}` must be a plain file name",
                self.build.filename.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
