//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn organization() -> String {
        "Cheese Wheels Apps OU".into()
    }

    pub fn year() -> Option<i32> {
        None
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn template() -> PathBuf {
        "template.html".into()
    }

    pub fn translations() -> PathBuf {
        "translations".into()
    }

    pub fn output() -> PathBuf {
        ".".into()
    }

    pub fn filename() -> PathBuf {
        "index.html".into()
    }
}

// ============================================================================
// [[languages]] Defaults
// ============================================================================

pub mod languages {
    use super::super::Language;

    /// Default language first, then the rest in build order.
    const CODES: &[&str] = &["en", "es", "fr", "sv", "it", "nl", "pt"];

    pub fn list() -> Vec<Language> {
        CODES
            .iter()
            .enumerate()
            .map(|(i, code)| Language::new(*code, i == 0))
            .collect()
    }
}
