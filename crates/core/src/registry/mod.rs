//! Validated, immutable version registry.
//!
//! A [`VersionRegistry`] is built once from a [`RegistryDoc`] (or from the
//! built-in table) and is read-only afterwards. Construction enforces the
//! registry invariants; lookups against a constructed registry either match
//! exactly one entry or nothing.

pub mod builtin;

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::debug;

use crate::model::{EraDescriptor, GlobalTag, RegistryDoc, VersionEntry};
use crate::validation::{validate_subsystem_name, validate_version_tag};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry contains no version entries")]
    Empty,

    #[error("malformed version tag '{tag}': {reason}")]
    MalformedTag { tag: String, reason: String },

    #[error("malformed subsystem name '{subsystem}': {reason}")]
    MalformedSubsystem { subsystem: String, reason: String },

    #[error("version tag '{tag}' is registered more than once")]
    DuplicateTag { tag: String },

    #[error(
        "versions '{first}' and '{second}' register the same (global tag, era) pair without an alias declaration"
    )]
    DuplicatePair { first: String, second: String },

    #[error("registry declares no default version")]
    MissingDefault,

    #[error("default version '{version}' is not registered")]
    UnregisteredDefault { version: String },

    #[error("subsystem '{subsystem}' pins unregistered version '{version}'")]
    UnregisteredSubsystemPin { subsystem: String, version: String },

    #[error("fragments disagree on the default version: '{first}' vs '{second}'")]
    ConflictingDefault { first: String, second: String },

    #[error("fragments disagree on the pin for subsystem '{subsystem}': '{first}' vs '{second}'")]
    ConflictingSubsystemPin {
        subsystem: String,
        first: String,
        second: String,
    },
}

/// Ordered mapping from version tags (and their aliases) to registered
/// (global tag, era) pairs, plus the default version and per-subsystem pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRegistry {
    entries: Vec<VersionEntry>,
    index: HashMap<String, usize>,
    default_index: usize,
    subsystem_defaults: BTreeMap<String, String>,
}

impl VersionRegistry {
    /// Validate a registry document and build the lookup index.
    pub fn from_doc(doc: RegistryDoc) -> Result<Self, RegistryError> {
        if doc.versions.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(doc.versions.len());
        let mut pairs: HashMap<(&GlobalTag, &EraDescriptor), &str> =
            HashMap::with_capacity(doc.versions.len());
        for (position, entry) in doc.versions.iter().enumerate() {
            validate_version_tag(&entry.version).map_err(|source| {
                RegistryError::MalformedTag {
                    tag: entry.version.clone(),
                    reason: source.to_string(),
                }
            })?;
            if index.insert(entry.version.clone(), position).is_some() {
                return Err(RegistryError::DuplicateTag {
                    tag: entry.version.clone(),
                });
            }
            if let Some(first) = pairs.insert((&entry.global_tag, &entry.era), &entry.version) {
                return Err(RegistryError::DuplicatePair {
                    first: first.to_string(),
                    second: entry.version.clone(),
                });
            }
        }

        // Aliases go in a second pass so a collision with any version tag is
        // caught regardless of declaration order.
        for (position, entry) in doc.versions.iter().enumerate() {
            for alias in &entry.aliases {
                validate_version_tag(alias).map_err(|source| RegistryError::MalformedTag {
                    tag: alias.clone(),
                    reason: source.to_string(),
                })?;
                if index.insert(alias.clone(), position).is_some() {
                    return Err(RegistryError::DuplicateTag { tag: alias.clone() });
                }
            }
        }

        let default_version = doc.default_version.ok_or(RegistryError::MissingDefault)?;
        let default_index =
            *index
                .get(&default_version)
                .ok_or_else(|| RegistryError::UnregisteredDefault {
                    version: default_version.clone(),
                })?;

        for (subsystem, version) in &doc.subsystem_defaults {
            validate_subsystem_name(subsystem).map_err(|source| {
                RegistryError::MalformedSubsystem {
                    subsystem: subsystem.clone(),
                    reason: source.to_string(),
                }
            })?;
            if !index.contains_key(version) {
                return Err(RegistryError::UnregisteredSubsystemPin {
                    subsystem: subsystem.clone(),
                    version: version.clone(),
                });
            }
        }

        debug!(
            versions = doc.versions.len(),
            default = %default_version,
            "validated version registry"
        );

        Ok(Self {
            entries: doc.versions,
            index,
            default_index,
            subsystem_defaults: doc.subsystem_defaults,
        })
    }

    /// Look up an entry by version tag or alias.
    pub fn get(&self, tag: &str) -> Option<&VersionEntry> {
        self.index.get(tag).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    /// Canonical version tags in declaration order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.version.as_str())
    }

    pub fn default_entry(&self) -> &VersionEntry {
        &self.entries[self.default_index]
    }

    /// Canonical tag of the default version.
    pub fn default_version(&self) -> &str {
        &self.default_entry().version
    }

    pub fn subsystem_default(&self, subsystem: &str) -> Option<&str> {
        self.subsystem_defaults
            .get(subsystem)
            .map(String::as_str)
    }

    pub fn subsystem_defaults(&self) -> &BTreeMap<String, String> {
        &self.subsystem_defaults
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Combine registry fragments into a single document.
///
/// Fragments contribute disjoint version entries, in fragment order. They
/// must agree on the default version and on subsystem pins; a value declared
/// by several fragments is an error only when the declarations differ.
pub fn merge_fragments(
    fragments: impl IntoIterator<Item = RegistryDoc>,
) -> Result<RegistryDoc, RegistryError> {
    let mut merged = RegistryDoc::default();
    for doc in fragments {
        for entry in doc.versions {
            if merged
                .versions
                .iter()
                .any(|existing| existing.version == entry.version)
            {
                return Err(RegistryError::DuplicateTag { tag: entry.version });
            }
            merged.versions.push(entry);
        }
        if let Some(default) = doc.default_version {
            match merged.default_version.take() {
                Some(existing) if existing != default => {
                    return Err(RegistryError::ConflictingDefault {
                        first: existing,
                        second: default,
                    });
                }
                _ => merged.default_version = Some(default),
            }
        }
        for (subsystem, version) in doc.subsystem_defaults {
            if let Some(existing) = merged.subsystem_defaults.get(&subsystem).cloned() {
                if existing != version {
                    return Err(RegistryError::ConflictingSubsystemPin {
                        subsystem,
                        first: existing,
                        second: version,
                    });
                }
            } else {
                merged.subsystem_defaults.insert(subsystem, version);
            }
        }
    }
    Ok(merged)
}
