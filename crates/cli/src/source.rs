// Registry source selection
// Commands either use the built-in version table or load a registry from
// operator-supplied documents; parsing failures carry the file and field
// that caused them.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use detcond_core::model::RegistryDoc;
use detcond_core::registry::{merge_fragments, VersionRegistry};
use walkdir::WalkDir;

/// Where the registry comes from. With neither option the built-in version
/// table is used.
#[derive(Debug, Clone, Args)]
pub struct RegistryOpts {
    /// Load the registry from a single YAML or JSON document
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Merge registry fragments (*.yaml, *.yml, *.json) found under a directory
    #[arg(long, value_name = "DIR", conflicts_with = "registry")]
    pub registry_dir: Option<PathBuf>,
}

pub fn load_registry(opts: &RegistryOpts) -> Result<VersionRegistry> {
    if let Some(path) = &opts.registry {
        let doc = parse_doc(path)?;
        VersionRegistry::from_doc(doc)
            .with_context(|| format!("Invalid registry document: {}", path.display()))
    } else if let Some(dir) = &opts.registry_dir {
        let mut fragments = Vec::new();
        for path in discover_fragments(dir)? {
            fragments.push(parse_doc(&path)?);
        }
        let merged = merge_fragments(fragments).with_context(|| {
            format!(
                "Failed to merge registry fragments under {}",
                dir.display()
            )
        })?;
        VersionRegistry::from_doc(merged)
            .with_context(|| format!("Invalid merged registry under {}", dir.display()))
    } else {
        Ok(VersionRegistry::builtin())
    }
}

/// Parse one registry document, JSON by extension, YAML otherwise.
fn parse_doc(path: &Path) -> Result<RegistryDoc> {
    if !path.exists() {
        bail!(
            "Registry document not found: {}\nPlease check the file path and try again.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry document: {}", path.display()))?;

    let doc = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let mut deserializer = serde_json::Deserializer::from_str(&content);
            serde_path_to_error::deserialize(&mut deserializer).with_context(|| {
                format!("Failed to parse JSON registry document: {}", path.display())
            })?
        }
        _ => {
            let deserializer = serde_yaml::Deserializer::from_str(&content);
            serde_path_to_error::deserialize(deserializer).with_context(|| {
                format!("Failed to parse YAML registry document: {}", path.display())
            })?
        }
    };
    Ok(doc)
}

/// Fragment files under a directory, in sorted path order so merging is
/// deterministic.
fn discover_fragments(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Registry fragment directory not found: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("yaml" | "yml" | "json")
            )
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!(
            "No registry fragments (*.yaml, *.yml, *.json) under {}",
            dir.display()
        );
    }
    Ok(paths)
}
