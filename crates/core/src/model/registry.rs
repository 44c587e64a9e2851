use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::era::{EraDescriptor, GlobalTag};

/// One registered detector configuration version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: String,
    pub global_tag: GlobalTag,
    pub era: EraDescriptor,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// On-disk registry document. A registry may be a single document or a set
/// of fragments merged with [`crate::registry::merge_fragments`]; only the
/// merged result needs to carry a `default_version`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryDoc {
    #[serde(default)]
    pub default_version: Option<String>,
    #[serde(default)]
    pub subsystem_defaults: BTreeMap<String, String>,
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}
