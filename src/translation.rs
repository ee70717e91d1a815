//! Per-language translation files.
//!
//! A translation file is a flat JSON object of string keys to string values:
//!
//! ```json
//! {
//!   "title": "Padel Speaker",
//!   "greeting": "Hola"
//! }
//! ```

use crate::build::BuildError;
use std::{collections::HashMap, fs, path::Path};

/// Placeholder key → substitution value.
pub type Translations = HashMap<String, String>;

/// Read and parse one translation file.
///
/// Nested objects, arrays, numbers and other non-string values are rejected
/// as parse errors.
pub fn load(path: &Path) -> Result<Translations, BuildError> {
    let content =
        fs::read_to_string(path).map_err(|err| BuildError::Io(path.to_path_buf(), err))?;
    parse(&content).map_err(|err| BuildError::Parse(path.to_path_buf(), err))
}

/// Parse translation JSON from a string.
pub fn parse(content: &str) -> Result<Translations, serde_json::Error> {
    serde_json::from_str(content)
}
