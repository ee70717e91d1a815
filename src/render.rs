//! `{{key}}` placeholder substitution.
//!
//! Placeholders are `{{` + one or more word characters + `}}`. A placeholder
//! whose key is present in the data is replaced by its value verbatim; any
//! other placeholder is left untouched, delimiters included.
//!
//! Substituted values are never re-scanned and never HTML-escaped.

use crate::translation::Translations;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `{{identifier}}` where identifier is `\w+` (Unicode word characters).
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Replace every known `{{key}}` in `template` with its value from `data`.
pub fn render(template: &str, data: &Translations) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}
