use std::collections::BTreeMap;

use detcond_core::model::{EraDescriptor, GlobalTag, RegistryDoc, VersionEntry};

#[allow(dead_code)]
pub fn entry(version: &str, tag: &str, era: &str) -> VersionEntry {
    VersionEntry {
        version: version.to_string(),
        global_tag: GlobalTag::new(tag),
        era: EraDescriptor::new(era),
        aliases: Vec::new(),
        description: None,
    }
}

#[allow(dead_code)]
pub fn entry_with_aliases(version: &str, tag: &str, era: &str, aliases: &[&str]) -> VersionEntry {
    VersionEntry {
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        ..entry(version, tag, era)
    }
}

/// Small registry document covering the shapes the suites need: several
/// versions, a default, and one subsystem pin.
#[allow(dead_code)]
pub fn sample_doc() -> RegistryDoc {
    RegistryDoc {
        default_version: Some("D110".to_string()),
        subsystem_defaults: BTreeMap::from([("mtd".to_string(), "D110".to_string())]),
        versions: vec![
            entry("D95", "auto:phase2_realistic_T21", "Phase2C17I13M9"),
            entry("D110", "auto:phase2_realistic_T33", "Phase2C17I13M9"),
            entry("D123", "auto:phase2_realistic_T39", "Phase2C26I13M9"),
        ],
    }
}
