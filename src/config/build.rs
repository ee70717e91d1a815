//! `[build]` section configuration.
//!
//! Input and output locations. Relative paths are resolved against the
//! project root when the CLI is applied.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[build]` section in langpage.toml.
///
/// # Example
/// ```toml
/// [build]
/// template = "template.html"
/// translations = "translations"   # holds en.json, fr.json, ...
/// output = "."                    # default language lands at ./index.html
/// filename = "index.html"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Project root directory (set from CLI, not from the file).
    #[serde(skip)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// HTML template containing `{{key}}` placeholders.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Directory holding one `<code>.json` file per language.
    #[serde(default = "defaults::build::translations")]
    #[educe(Default = defaults::build::translations())]
    pub translations: PathBuf,

    /// Output root. The default language is written directly here.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// File name of every rendered page.
    #[serde(default = "defaults::build::filename")]
    #[educe(Default = defaults::build::filename())]
    pub filename: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_section() {
        let config = r#"
            [build]
            template = "src/page.html"
            translations = "i18n"
            output = "public"
            filename = "home.html"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.template, PathBuf::from("src/page.html"));
        assert_eq!(config.build.translations, PathBuf::from("i18n"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.filename, PathBuf::from("home.html"));
    }

    #[test]
    fn test_build_section_defaults() {
        let config: SiteConfig = toml::from_str("[build]").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.template, PathBuf::from("template.html"));
        assert_eq!(config.build.translations, PathBuf::from("translations"));
        assert_eq!(config.build.output, PathBuf::from("."));
        assert_eq!(config.build.filename, PathBuf::from("index.html"));
    }

    #[test]
    fn test_root_is_not_read_from_file() {
        let config = r#"
            [build]
            root = "/elsewhere"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
