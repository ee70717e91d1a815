//! Per-language build outcomes.

use std::path::{Path, PathBuf};

/// What happened to one language during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page rendered and written to `path`.
    Written { code: String, path: PathBuf },
    /// No translation file at `missing`; nothing written.
    Skipped { code: String, missing: PathBuf },
}

/// Outcomes in language order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub outcomes: Vec<PageOutcome>,
}

impl BuildReport {
    pub(super) fn push(&mut self, outcome: PageOutcome) {
        self.outcomes.push(outcome);
    }

    /// Paths of pages written in this run.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            PageOutcome::Written { path, .. } => Some(path.as_path()),
            PageOutcome::Skipped { .. } => None,
        })
    }

    /// Codes of languages skipped for lack of a translation file.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            PageOutcome::Skipped { code, .. } => Some(code.as_str()),
            PageOutcome::Written { .. } => None,
        })
    }
}
