//! `[site]` section configuration.
//!
//! Values that feed the `{{footer_copy}}` line.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[site]` section in langpage.toml.
///
/// # Example
/// ```toml
/// [site]
/// organization = "Cheese Wheels Apps OU"
/// year = 2025  # pin the footer year for reproducible output
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Organization named in the copyright footer.
    #[serde(default = "defaults::site::organization")]
    #[educe(Default = defaults::site::organization())]
    pub organization: String,

    /// Footer year. Uses the current calendar year when unset.
    #[serde(default = "defaults::site::year")]
    #[educe(Default = defaults::site::year())]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_section() {
        let config = r#"
            [site]
            organization = "Padel Co"
            year = 2030
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.organization, "Padel Co");
        assert_eq!(config.site.year, Some(2030));
    }

    #[test]
    fn test_site_section_defaults() {
        let config: SiteConfig = toml::from_str("[site]").unwrap();

        assert_eq!(config.site.organization, "Cheese Wheels Apps OU");
        assert_eq!(config.site.year, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            owner = "someone"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
