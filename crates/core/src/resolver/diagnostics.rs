// Diagnostic types for resolution failures
// Captures what the resolver knew when a lookup failed, for operator-facing
// error reporting.

use serde::{Deserialize, Serialize};

use crate::registry::VersionRegistry;
use crate::validation::is_valid_version_tag;

/// Failure context for an unknown-version lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionDiagnostic {
    pub requested: String,
    /// Whether the requested tag at least matched the `D<number>` form.
    pub shape_ok: bool,
    pub known_versions: Vec<String>,
    pub suggestion: Option<String>,
}

impl ResolutionDiagnostic {
    /// Build the diagnostic for a tag that matched no registry entry.
    pub fn unknown(requested: &str, registry: &VersionRegistry) -> Self {
        let suggestion = nearest_version(requested, registry.versions()).map(str::to_string);
        Self {
            requested: requested.to_string(),
            shape_ok: is_valid_version_tag(requested),
            known_versions: registry.versions().map(str::to_string).collect(),
            suggestion,
        }
    }
}

/// Registered tag closest to the requested one.
///
/// A case-insensitive match wins outright; otherwise the tag with the
/// nearest version number is chosen. Ties resolve to the earliest declared
/// tag.
pub fn nearest_version<'a>(
    requested: &str,
    known: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let known: Vec<&str> = known.collect();
    if let Some(tag) = known
        .iter()
        .copied()
        .find(|tag| tag.eq_ignore_ascii_case(requested))
    {
        return Some(tag);
    }
    let requested_number = version_number(requested)?;
    known
        .into_iter()
        .filter_map(|tag| version_number(tag).map(|number| (tag, number.abs_diff(requested_number))))
        .min_by_key(|(_, distance)| *distance)
        .map(|(tag, _)| tag)
}

fn version_number(tag: &str) -> Option<u32> {
    tag.strip_prefix(['D', 'd'])?.parse().ok()
}
