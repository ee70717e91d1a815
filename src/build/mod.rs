//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── read template ──► fatal if unreadable
//!     │
//!     └── for each language (config order)
//!             │
//!             ├── <translations>/<code>.json missing ──► [skip], continue
//!             │
//!             ├── load translations ──► fatal if malformed
//!             ├── footer.apply()     ──► footer_copy always overridden
//!             ├── render()
//!             └── write <output>/[<code>/]<filename> ──► [ok]
//! ```
//!
//! Pages written before a fatal error are left in place.

mod error;
mod report;

pub use error::BuildError;
pub use report::{BuildReport, PageOutcome};

use crate::{
    config::{Language, SiteConfig},
    footer::Footer,
    log,
    render::render,
    translation,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Render and write one page per configured language.
///
/// `footer` supplies the `{{footer_copy}}` value for every page.
pub fn build_site(config: &SiteConfig, footer: &Footer) -> Result<BuildReport> {
    let template_path = &config.build.template;
    let default = config.default_language().map_or("none", |lang| lang.code.as_str());
    log!("build"; "building {} languages (default: {default})...", config.languages.len());

    let template = fs::read_to_string(template_path)
        .map_err(|err| BuildError::Io(template_path.clone(), err))?;

    let mut report = BuildReport::default();
    for lang in &config.languages {
        let outcome = build_language(lang, &template, config, footer)
            .with_context(|| format!("Failed to build language `{}`", lang.code))?;
        log_outcome(&outcome, config);
        report.push(outcome);
    }

    log_build_result(&report);
    Ok(report)
}

/// Render and write a single language, or skip it when its data is missing.
fn build_language(
    lang: &Language,
    template: &str,
    config: &SiteConfig,
    footer: &Footer,
) -> Result<PageOutcome, BuildError> {
    let data_path = lang.data_path(&config.build.translations);
    let present = data_path
        .try_exists()
        .map_err(|err| BuildError::Io(data_path.clone(), err))?;
    if !present {
        return Ok(PageOutcome::Skipped {
            code: lang.code.clone(),
            missing: data_path,
        });
    }

    let mut data = translation::load(&data_path)?;
    footer.apply(&mut data);
    let html = render(template, &data);

    let path = lang.output_path(&config.build.output, &config.build.filename);
    write_page(&path, &html)?;

    Ok(PageOutcome::Written {
        code: lang.code.clone(),
        path,
    })
}

/// Write `html` to `path`, creating the language directory when needed.
fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| BuildError::CreateDir(parent.to_path_buf(), err))?;
    }
    fs::write(path, html).map_err(|err| BuildError::Write(path.to_path_buf(), err))
}

/// Path relative to `base` when possible, for console output.
fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// Log one line per language
fn log_outcome(outcome: &PageOutcome, config: &SiteConfig) {
    match outcome {
        PageOutcome::Written { code, path } => {
            log!("ok"; "{code}: {}", relative_display(path, &config.build.output))
        }
        PageOutcome::Skipped { code, missing } => {
            log!("skip"; "{code}: {} not found", relative_display(missing, config.get_root()))
        }
    }
}

/// Log the completion banner
fn log_build_result(report: &BuildReport) {
    let written = report.written().count();
    let skipped = report.skipped().count();

    if written == 0 {
        log!("warn"; "no pages written, check the translations directory");
    } else {
        log!("build"; "done ({written} written, {skipped} skipped)");
    }
}

// ============================================================================
// Tests
// ============================================================================
