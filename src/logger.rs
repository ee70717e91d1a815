//! Colored console output for build progress.
//!
//! Every line has the shape `[module] message`:
//!
//! ```text
//! [build] building 7 languages (default: en)...
//! [skip] en: translations/en.json not found
//! [ok] fr: fr/index.html
//! [build] done (1 written, 6 skipped)
//! ```
//!
//! # Example
//!
//! ```ignore
//! log!("ok"; "{}", path.display());
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;
/// Width used when the terminal size cannot be detected (pipes, CI).
const FALLBACK_WIDTH: u16 = 120;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for "[", "]", and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Automatically truncates long messages to fit terminal width.
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let width = get_terminal_width() as usize;

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();

    let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
    let message = truncate_str(message, max_msg_len);

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "ok" => prefix.bright_green().bold(),
        "skip" => prefix.bright_yellow().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_blue().bold(),
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "ok" -> "[ok] " = 2 + 2 + 1 = 5
        assert_eq!(calc_prefix_len(2), 5);
        // "build" -> "[build] " = 5 + 2 + 1 = 8
        assert_eq!(calc_prefix_len(5), 8);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("fr/index.html", 40), "fr/index.html");
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("translations/sv.json not found", 12), "translations");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "©" is 2 bytes; cutting inside it falls back to the previous boundary
        let s = "a© 2025";
        assert_eq!(truncate_str(s, 2), "a");
        assert_eq!(truncate_str(s, 3), "a©");
    }

    #[test]
    fn test_truncate_str_multibyte_cjk() {
        let s = "你好";
        assert_eq!(truncate_str(s, 4), "你");
        assert_eq!(truncate_str(s, 6), "你好");
    }

    #[test]
    fn test_colorize_prefix_keeps_module_text() {
        colored::control::set_override(false);
        assert_eq!(colorize_prefix("ok", "ok").to_string(), "[ok]");
        assert_eq!(colorize_prefix("SKIP", "skip").to_string(), "[SKIP]");
        assert_eq!(colorize_prefix("build", "build").to_string(), "[build]");
        assert_eq!(colorize_prefix("error", "error").to_string(), "[error]");
    }
}
