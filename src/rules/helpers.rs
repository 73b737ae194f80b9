//! Name heuristics and string predicates used to recognize logger calls.
//!
//! These are deliberately kept together as one small table so a stricter,
//! type-aware check could replace them without touching the reorder logic.
//! The rules are purely syntactic: false negatives are tolerated, false
//! positives are minimized by only accepting names that very likely refer
//! to a pino logger.

use std::sync::LazyLock;

use regex::Regex;

static INTERPOLATION_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[sdioO%]").unwrap());

/// Whether a simple identifier receiver looks like a pino logger handle.
///
/// The platform console API is excluded first: `console.log("msg", data)`
/// is a different calling convention and must never be flagged.
pub fn is_logger_object_name(name: &str) -> bool {
    if name == "console" || name.ends_with("Console") {
        return false;
    }

    let lower = name.to_lowercase();
    lower == "logger"
        || lower == "log"
        || lower == "pino"
        || lower.starts_with("pino")
        || lower.contains("pinolog")
}

/// Whether the property of a nested receiver (`this.logger.info(...)`)
/// names a logger. Stricter than [`is_logger_object_name`]: only exact
/// matches are accepted.
pub fn is_logger_property_name(name: &str) -> bool {
    matches!(name.to_lowercase().as_str(), "logger" | "log" | "pino")
}

/// Whether a plain string contains printf-style interpolation markers
/// (`%s`, `%d`, `%i`, `%o`, `%O`, `%%`).
///
/// Pino supports positional formatting, so `logger.info('Hello %s', name)`
/// is a deliberate convention and not a misordered call.
pub fn has_interpolation_markers(text: &str) -> bool {
    INTERPOLATION_MARKER_REGEX.is_match(text)
}
