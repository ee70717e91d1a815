//! Copyright footer injected into every page as `{{footer_copy}}`.

use crate::translation::Translations;
use chrono::{Datelike, Local};

/// Placeholder key that always carries the copyright line.
pub const FOOTER_KEY: &str = "footer_copy";

/// Year and organization used to build the copyright line.
///
/// Passed into the build explicitly so a run never reads the clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub year: i32,
    pub organization: String,
}

impl Footer {
    pub fn new(year: i32, organization: impl Into<String>) -> Self {
        Self {
            year,
            organization: organization.into(),
        }
    }

    /// Footer for the current local calendar year.
    pub fn current(organization: impl Into<String>) -> Self {
        Self::new(Local::now().year(), organization)
    }

    /// `© {year} {organization}`
    pub fn copyright(&self) -> String {
        format!("© {} {}", self.year, self.organization)
    }

    /// Insert the copyright line, replacing any value the translations carry.
    pub fn apply(&self, data: &mut Translations) {
        data.insert(FOOTER_KEY.to_owned(), self.copyright());
    }
}
