// Fragment merge tests
// Registries may be assembled from several fragment documents; merging must
// preserve declaration order and reject disagreements instead of picking a
// winner.

mod common;

use std::collections::BTreeMap;

use common::entry;
use detcond_core::model::RegistryDoc;
use detcond_core::registry::{merge_fragments, RegistryError, VersionRegistry};

fn fragment(versions: Vec<detcond_core::model::VersionEntry>) -> RegistryDoc {
    RegistryDoc {
        versions,
        ..RegistryDoc::default()
    }
}

#[test]
fn disjoint_fragments_merge_in_order() {
    let base = RegistryDoc {
        default_version: Some("D110".to_string()),
        subsystem_defaults: BTreeMap::from([("mtd".to_string(), "D110".to_string())]),
        versions: vec![entry("D110", "auto:phase2_realistic_T33", "Phase2C17I13M9")],
    };
    let extra = fragment(vec![
        entry("D120", "auto:phase2_realistic_T35", "Phase2C22I13M9"),
        entry("D123", "auto:phase2_realistic_T39", "Phase2C26I13M9"),
    ]);

    let merged = merge_fragments([base, extra]).unwrap();
    let registry = VersionRegistry::from_doc(merged).unwrap();

    let versions: Vec<_> = registry.versions().collect();
    assert_eq!(versions, vec!["D110", "D120", "D123"]);
    assert_eq!(registry.default_version(), "D110");
    assert_eq!(registry.subsystem_default("mtd"), Some("D110"));
}

#[test]
fn overlapping_version_tags_are_rejected() {
    let first = fragment(vec![entry(
        "D110",
        "auto:phase2_realistic_T33",
        "Phase2C17I13M9",
    )]);
    let second = fragment(vec![entry(
        "D110",
        "auto:phase2_realistic_T90",
        "Phase2C90I13M9",
    )]);

    assert_eq!(
        merge_fragments([first, second]).unwrap_err(),
        RegistryError::DuplicateTag {
            tag: "D110".to_string()
        }
    );
}

#[test]
fn disagreeing_defaults_are_rejected() {
    let first = RegistryDoc {
        default_version: Some("D110".to_string()),
        ..RegistryDoc::default()
    };
    let second = RegistryDoc {
        default_version: Some("D123".to_string()),
        ..RegistryDoc::default()
    };

    assert_eq!(
        merge_fragments([first, second]).unwrap_err(),
        RegistryError::ConflictingDefault {
            first: "D110".to_string(),
            second: "D123".to_string()
        }
    );
}

#[test]
fn agreeing_defaults_merge() {
    let first = RegistryDoc {
        default_version: Some("D110".to_string()),
        versions: vec![entry("D110", "auto:phase2_realistic_T33", "Phase2C17I13M9")],
        ..RegistryDoc::default()
    };
    let second = RegistryDoc {
        default_version: Some("D110".to_string()),
        ..RegistryDoc::default()
    };

    let merged = merge_fragments([first, second]).unwrap();
    assert_eq!(merged.default_version.as_deref(), Some("D110"));
}

#[test]
fn disagreeing_subsystem_pins_are_rejected() {
    let first = RegistryDoc {
        subsystem_defaults: BTreeMap::from([("mtd".to_string(), "D110".to_string())]),
        ..RegistryDoc::default()
    };
    let second = RegistryDoc {
        subsystem_defaults: BTreeMap::from([("mtd".to_string(), "D123".to_string())]),
        ..RegistryDoc::default()
    };

    assert_eq!(
        merge_fragments([first, second]).unwrap_err(),
        RegistryError::ConflictingSubsystemPin {
            subsystem: "mtd".to_string(),
            first: "D110".to_string(),
            second: "D123".to_string()
        }
    );
}

#[test]
fn agreeing_subsystem_pins_merge() {
    let pin = BTreeMap::from([("mtd".to_string(), "D110".to_string())]);
    let first = RegistryDoc {
        subsystem_defaults: pin.clone(),
        ..RegistryDoc::default()
    };
    let second = RegistryDoc {
        subsystem_defaults: pin.clone(),
        ..RegistryDoc::default()
    };

    let merged = merge_fragments([first, second]).unwrap();
    assert_eq!(merged.subsystem_defaults, pin);
}

#[test]
fn yaml_fragments_parse_and_build() {
    let base: RegistryDoc = serde_yaml::from_str(
        r#"
default_version: D110
subsystem_defaults:
  mtd: D110
versions:
  - version: D110
    global_tag: auto:phase2_realistic_T33
    era:
      name: Phase2C17I13M9
      modifiers: [dd4hep]
    description: baseline
"#,
    )
    .unwrap();
    let extra: RegistryDoc = serde_yaml::from_str(
        r#"
versions:
  - version: D123
    global_tag: auto:phase2_realistic_T39
    era:
      name: Phase2C26I13M9
"#,
    )
    .unwrap();

    let registry = VersionRegistry::from_doc(merge_fragments([base, extra]).unwrap()).unwrap();
    assert_eq!(registry.len(), 2);
    let entry = registry.get("D110").unwrap();
    assert_eq!(entry.era.modifiers, vec!["dd4hep"]);
    assert_eq!(entry.description.as_deref(), Some("baseline"));
    // era.modifiers defaults to empty when the document omits it
    assert!(registry.get("D123").unwrap().era.modifiers.is_empty());
}

#[test]
fn json_documents_parse_and_build() {
    let doc: RegistryDoc = serde_json::from_str(
        r#"{
            "default_version": "D123",
            "versions": [
                {
                    "version": "D123",
                    "global_tag": "auto:phase2_realistic_T39",
                    "era": { "name": "Phase2C26I13M9", "modifiers": ["dd4hep"] }
                }
            ]
        }"#,
    )
    .unwrap();

    let registry = VersionRegistry::from_doc(doc).unwrap();
    assert_eq!(registry.default_version(), "D123");
}
