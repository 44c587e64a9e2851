// Era resolver - configuration-time resolution entry point
// Translates a requested detector configuration version into the registered
// (global tag, era) pair the configuration build needs.

use thiserror::Error;
use tracing::debug;

use crate::model::{EraDescriptor, GlobalTag, VersionEntry};
use crate::registry::VersionRegistry;
use crate::resolver::diagnostics::ResolutionDiagnostic;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(
        "unknown detector configuration version '{}' (known versions: {})",
        .diagnostic.requested,
        .diagnostic.known_versions.join(", ")
    )]
    UnknownVersion { diagnostic: ResolutionDiagnostic },

    #[error("unknown subsystem '{requested}' (known subsystems: {})", .known.join(", "))]
    UnknownSubsystem { requested: String, known: Vec<String> },
}

/// Resolves detector configuration versions against an immutable registry.
///
/// The registry is injected at construction time; the resolver holds no
/// other state and every lookup is a synchronous, single-step operation.
/// A failed lookup is fatal to the configuration build that requested it:
/// there is no fallback and no silent default.
#[derive(Debug, Clone)]
pub struct EraResolver {
    registry: VersionRegistry,
}

impl EraResolver {
    pub fn new(registry: VersionRegistry) -> Self {
        Self { registry }
    }

    /// Resolver over the built-in version table.
    pub fn builtin() -> Self {
        Self::new(VersionRegistry::builtin())
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// Validate a requested version without resolving it.
    ///
    /// Pure validation: no side effects, and the same unknown-version error
    /// as [`EraResolver::get_era_and_conditions`] for tags absent from the
    /// registry, malformed, or empty.
    pub fn check_version(&self, version: &str) -> Result<(), ResolutionError> {
        self.entry(version).map(|_| ())
    }

    /// Return the registered (global tag, era) pair for a version.
    ///
    /// Validates internally; callers need not call
    /// [`EraResolver::check_version`] first. The pair is returned by shared
    /// reference and is never partially filled.
    pub fn get_era_and_conditions(
        &self,
        version: &str,
    ) -> Result<(&GlobalTag, &EraDescriptor), ResolutionError> {
        let entry = self.entry(version)?;
        debug!(
            version = %entry.version,
            global_tag = %entry.global_tag,
            era = %entry.era,
            "resolved detector configuration version"
        );
        Ok((&entry.global_tag, &entry.era))
    }

    /// Pair for the registry's default version.
    ///
    /// Infallible: the default's presence is a registry construction
    /// invariant.
    pub fn resolve_default(&self) -> (&GlobalTag, &EraDescriptor) {
        let entry = self.registry.default_entry();
        (&entry.global_tag, &entry.era)
    }

    /// Version tag a subsystem pins as the one it was validated against.
    pub fn subsystem_default(&self, subsystem: &str) -> Result<&str, ResolutionError> {
        self.registry.subsystem_default(subsystem).ok_or_else(|| {
            ResolutionError::UnknownSubsystem {
                requested: subsystem.to_string(),
                known: self.registry.subsystem_defaults().keys().cloned().collect(),
            }
        })
    }

    fn entry(&self, version: &str) -> Result<&VersionEntry, ResolutionError> {
        self.registry
            .get(version)
            .ok_or_else(|| ResolutionError::UnknownVersion {
                diagnostic: ResolutionDiagnostic::unknown(version, &self.registry),
            })
    }
}
