use anyhow::Result;
use clap::Parser;
use detcond_core::model::{EraDescriptor, GlobalTag};
use detcond_core::resolver::engine::EraResolver;
use serde::Serialize;

use crate::commands::{parse_output_format, report_resolution_failure, OutputFormat};
use crate::source::{load_registry, RegistryOpts};

/// Resolve a version to its (global tag, era) pair
#[derive(Debug, Parser)]
pub struct ResolveCommand {
    /// Version tag to resolve (defaults to the registry's default version)
    #[arg(value_name = "VERSION")]
    pub version: Option<String>,

    #[command(flatten)]
    pub registry: RegistryOpts,

    /// Output format (human, json, yaml)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    version: &'a str,
    global_tag: &'a GlobalTag,
    era: &'a EraDescriptor,
}

impl ResolveCommand {
    pub fn execute(&self) -> Result<i32> {
        let output = parse_output_format(&self.output)?;
        let resolver = EraResolver::new(load_registry(&self.registry)?);

        let (version, global_tag, era) = match &self.version {
            Some(requested) => match resolver.get_era_and_conditions(requested) {
                Ok((global_tag, era)) => (requested.as_str(), global_tag, era),
                Err(error) => {
                    report_resolution_failure(&error);
                    return Ok(1);
                }
            },
            None => {
                let (global_tag, era) = resolver.resolve_default();
                (resolver.registry().default_version(), global_tag, era)
            }
        };

        let report = ResolveReport {
            version,
            global_tag,
            era,
        };
        match output {
            OutputFormat::Human => {
                println!("version:    {}", report.version);
                println!("global tag: {}", report.global_tag);
                println!("era:        {}", report.era);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::ResolveCommand;
    use crate::source::RegistryOpts;

    fn command(version: Option<&str>) -> ResolveCommand {
        ResolveCommand {
            version: version.map(str::to_string),
            registry: RegistryOpts {
                registry: None,
                registry_dir: None,
            },
            output: "human".to_string(),
        }
    }

    #[test]
    fn known_version_exits_zero() {
        assert_eq!(command(Some("D123")).execute().unwrap(), 0);
    }

    #[test]
    fn omitted_version_resolves_the_default() {
        assert_eq!(command(None).execute().unwrap(), 0);
    }

    #[test]
    fn unknown_version_exits_nonzero() {
        assert_eq!(command(Some("D7777")).execute().unwrap(), 1);
    }

    #[test]
    fn unknown_output_format_is_a_hard_error() {
        let mut cmd = command(Some("D110"));
        cmd.output = "xml".to_string();
        assert!(cmd.execute().is_err());
    }
}
