//! Era and conditions resolution.
//!
//! This module translates a requested detector configuration version into
//! the registered (global tag, era) pair, against an immutable
//! [`crate::registry::VersionRegistry`].
//!
//! # Example
//!
//! ```ignore
//! use detcond_core::resolver::engine::EraResolver;
//!
//! let resolver = EraResolver::builtin();
//! resolver.check_version("D110")?;
//! let (global_tag, era) = resolver.get_era_and_conditions("D110")?;
//! ```
pub mod diagnostics;
pub mod engine;

/// Resolver submodule identifier.
pub fn module_name() -> &'static str {
    "resolver"
}
