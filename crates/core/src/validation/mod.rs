use anyhow::{bail, Result};
use regex::Regex;

pub fn module_name() -> &'static str {
    "validation"
}

lazy_static::lazy_static! {
    // Authoritative tag shape: uppercase D followed by a decimal integer
    // with no leading zeros (D95, D110, D123, ...).
    static ref VERSION_TAG: Regex = Regex::new(r"^D[1-9][0-9]*$").unwrap();
    static ref SUBSYSTEM_NAME: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

/// Check a tag against the expected `D<number>` form without reporting why
/// it failed.
pub fn is_valid_version_tag(tag: &str) -> bool {
    VERSION_TAG.is_match(tag)
}

pub fn validate_version_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        bail!("version tag cannot be empty");
    }
    if !VERSION_TAG.is_match(tag) {
        bail!("version tag '{tag}' does not match the D<number> form");
    }
    Ok(())
}

pub fn validate_subsystem_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("subsystem name cannot be empty");
    }
    if !SUBSYSTEM_NAME.is_match(name) {
        bail!("subsystem name '{name}' must be a lowercase identifier");
    }
    Ok(())
}
