//! Parameter path to environment variable name mapping.

use crate::core::config::Rename;
use crate::core::constants::PATH_SEPARATOR;

/// Derive an environment variable name from a parameter path.
///
/// The candidate is the segment after the last `/` (or the whole path when it has
/// none). The first rename rule whose `from` equals the candidate replaces it.
///
/// A path ending in `/` yields an empty name. It is returned as-is so a
/// misconfigured store path stays visible.
pub fn resolve_name(path: &str, rules: &[Rename]) -> String {
    let candidate = leaf(path);

    rules
        .iter()
        .find(|rule| rule.from == candidate)
        .map(|rule| rule.to.clone())
        .unwrap_or_else(|| candidate.to_string())
}

/// Final segment of a parameter path.
fn leaf(path: &str) -> &str {
    match path.rsplit_once(PATH_SEPARATOR) {
        Some((_, name)) => name,
        None => path,
    }
}
