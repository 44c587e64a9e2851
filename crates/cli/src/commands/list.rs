use anyhow::Result;
use clap::Parser;
use detcond_core::model::VersionEntry;
use serde::Serialize;

use crate::commands::{parse_output_format, OutputFormat};
use crate::source::{load_registry, RegistryOpts};

/// List registered versions in declaration order
#[derive(Debug, Parser)]
pub struct ListCommand {
    #[command(flatten)]
    pub registry: RegistryOpts,

    /// Output format (human, json, yaml)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

#[derive(Debug, Serialize)]
struct ListReport<'a> {
    default_version: &'a str,
    versions: &'a [VersionEntry],
}

impl ListCommand {
    pub fn execute(&self) -> Result<i32> {
        let output = parse_output_format(&self.output)?;
        let registry = load_registry(&self.registry)?;

        match output {
            OutputFormat::Human => {
                for entry in registry.entries() {
                    let marker = if entry.version == registry.default_version() {
                        "*"
                    } else {
                        " "
                    };
                    let era = entry.era.to_string();
                    let suffix = entry
                        .description
                        .as_deref()
                        .map(|description| format!("  ({description})"))
                        .unwrap_or_default();
                    println!(
                        "{marker} {:<6} {:<30} {era}{suffix}",
                        entry.version,
                        entry.global_tag.as_str()
                    );
                }
            }
            OutputFormat::Json | OutputFormat::Yaml => {
                let report = ListReport {
                    default_version: registry.default_version(),
                    versions: registry.entries(),
                };
                if output == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", serde_yaml::to_string(&report)?);
                }
            }
        }
        Ok(0)
    }
}
