//! Built-in authoritative version table.
//!
//! Mirrors the static configuration data the framework ships: the known
//! detector configuration versions with their conditions global tag and run
//! era, the process-wide default version, and the versions individual
//! subsystems were last validated against.

use std::collections::BTreeMap;

use super::VersionRegistry;
use crate::model::{EraDescriptor, GlobalTag, RegistryDoc, VersionEntry};

/// Version selected when the caller does not request one explicitly.
pub const DEFAULT_VERSION: &str = "D110";

/// Version the MTD subsystem description was last validated against.
pub const MTD_DEFAULT_VERSION: &str = "D110";

// (version, global tag, era, process modifiers, description)
const TABLE: &[(&str, &str, &str, &[&str], Option<&str>)] = &[
    (
        "D95",
        "auto:phase2_realistic_T21",
        "Phase2C17I13M9",
        &[],
        Some("T21 baseline outer tracker"),
    ),
    (
        "D96",
        "auto:phase2_realistic_T22",
        "Phase2C17I13M9",
        &[],
        Some("T22 tilted-barrel tracker variant"),
    ),
    (
        "D98",
        "auto:phase2_realistic_T25",
        "Phase2C17I13M9",
        &[],
        None,
    ),
    (
        "D99",
        "auto:phase2_realistic_T26",
        "Phase2C17I13M9",
        &[],
        None,
    ),
    (
        "D102",
        "auto:phase2_realistic_T27",
        "Phase2C17I13M9",
        &[],
        None,
    ),
    (
        "D104",
        "auto:phase2_realistic_T28",
        "Phase2C22I13M9",
        &[],
        Some("3D-sensor inner tracker"),
    ),
    (
        "D108",
        "auto:phase2_realistic_T30",
        "Phase2C17I13M9",
        &[],
        None,
    ),
    (
        "D110",
        "auto:phase2_realistic_T33",
        "Phase2C17I13M9",
        &["dd4hep"],
        Some("baseline since the DD4hep description migration"),
    ),
    (
        "D111",
        "auto:phase2_realistic_T36",
        "Phase2C22I13M9",
        &["dd4hep"],
        None,
    ),
    (
        "D112",
        "auto:phase2_realistic_T37",
        "Phase2C24I13M9",
        &["dd4hep"],
        None,
    ),
    (
        "D113",
        "auto:phase2_realistic_T38",
        "Phase2C26I13M9",
        &["dd4hep"],
        None,
    ),
    (
        "D114",
        "auto:phase2_realistic_T34",
        "Phase2C17I13M9",
        &["dd4hep"],
        Some("T34 timing-layer update"),
    ),
    (
        "D120",
        "auto:phase2_realistic_T35",
        "Phase2C22I13M9",
        &["dd4hep"],
        None,
    ),
    (
        "D123",
        "auto:phase2_realistic_T39",
        "Phase2C26I13M9",
        &["dd4hep"],
        Some("extended forward calorimeter layout"),
    ),
];

/// The built-in table as a plain registry document.
pub fn builtin_doc() -> RegistryDoc {
    RegistryDoc {
        default_version: Some(DEFAULT_VERSION.to_string()),
        subsystem_defaults: BTreeMap::from([(
            "mtd".to_string(),
            MTD_DEFAULT_VERSION.to_string(),
        )]),
        versions: TABLE
            .iter()
            .map(|row| {
                let (version, tag, era, modifiers, description) = *row;
                VersionEntry {
                    version: version.to_string(),
                    global_tag: GlobalTag::new(tag),
                    era: EraDescriptor::with_modifiers(era, modifiers),
                    aliases: Vec::new(),
                    description: description.map(|text| text.to_string()),
                }
            })
            .collect(),
    }
}

lazy_static::lazy_static! {
    static ref BUILTIN: VersionRegistry =
        VersionRegistry::from_doc(builtin_doc()).expect("built-in version table is valid");
}

impl VersionRegistry {
    /// Registry over the built-in version table.
    pub fn builtin() -> VersionRegistry {
        BUILTIN.clone()
    }
}
