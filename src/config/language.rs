//! `[[languages]]` entries and their path conventions.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One supported language.
///
/// # Example
/// ```toml
/// [[languages]]
/// code = "en"
/// default = true
///
/// [[languages]]
/// code = "fr"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Language {
    /// Language code, also used as file stem and output subdirectory.
    pub code: String,

    /// The default language is written to the output root.
    #[serde(default)]
    pub default: bool,
}

impl Language {
    pub fn new(code: impl Into<String>, default: bool) -> Self {
        Self {
            code: code.into(),
            default,
        }
    }

    /// `<translations>/<code>.json`
    pub fn data_path(&self, translations: &Path) -> PathBuf {
        translations.join(format!("{}.json", self.code))
    }

    /// `<output>/<filename>` for the default language,
    /// `<output>/<code>/<filename>` for every other one.
    pub fn output_path(&self, output: &Path, filename: &Path) -> PathBuf {
        if self.default {
            output.join(filename)
        } else {
            output.join(&self.code).join(filename)
        }
    }

    /// Whether the code is usable as a single path component.
    pub(super) fn has_valid_code(&self) -> bool {
        !self.code.is_empty()
            && self
                .code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_data_path() {
        let lang = Language::new("sv", false);
        assert_eq!(
            lang.data_path(Path::new("/site/translations")),
            PathBuf::from("/site/translations/sv.json")
        );
    }

    #[test]
    fn test_output_path_default_language() {
        let lang = Language::new("en", true);
        assert_eq!(
            lang.output_path(Path::new("/site"), Path::new("index.html")),
            PathBuf::from("/site/index.html")
        );
    }

    #[test]
    fn test_output_path_other_language() {
        let lang = Language::new("pt", false);
        assert_eq!(
            lang.output_path(Path::new("/site"), Path::new("index.html")),
            PathBuf::from("/site/pt/index.html")
        );
    }

    #[test]
    fn test_output_path_default_not_first() {
        // Default-ness, not list position, decides the root file
        let config = r#"
            [[languages]]
            code = "fr"

            [[languages]]
            code = "nl"
            default = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        let out = Path::new("/out");
        let file = Path::new("index.html");

        assert_eq!(
            config.languages[0].output_path(out, file),
            PathBuf::from("/out/fr/index.html")
        );
        assert_eq!(
            config.languages[1].output_path(out, file),
            PathBuf::from("/out/index.html")
        );
    }

    #[test]
    fn test_has_valid_code() {
        assert!(Language::new("en", true).has_valid_code());
        assert!(Language::new("pt-BR", false).has_valid_code());
        assert!(Language::new("zh_Hans", false).has_valid_code());

        assert!(!Language::new("", false).has_valid_code());
        assert!(!Language::new("..", false).has_valid_code());
        assert!(!Language::new("en/us", false).has_valid_code());
        assert!(!Language::new("e n", false).has_valid_code());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [[languages]]
            code = "en"
            name = "English"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
