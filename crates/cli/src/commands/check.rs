use anyhow::Result;
use clap::Parser;
use detcond_core::resolver::engine::EraResolver;

use crate::commands::report_resolution_failure;
use crate::source::{load_registry, RegistryOpts};

/// Validate version tags against the registry
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Version tags to validate
    #[arg(value_name = "VERSION", required_unless_present = "defaults")]
    pub versions: Vec<String>,

    /// Also verify that every per-subsystem default pin resolves
    #[arg(long)]
    pub defaults: bool,

    #[command(flatten)]
    pub registry: RegistryOpts,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        let resolver = EraResolver::new(load_registry(&self.registry)?);

        for requested in &self.versions {
            match resolver.get_era_and_conditions(requested) {
                Ok((global_tag, era)) => {
                    println!("{requested}: ok ({global_tag}, {era})");
                }
                Err(error) => {
                    report_resolution_failure(&error);
                    return Ok(1);
                }
            }
        }

        if self.defaults {
            for (subsystem, pinned) in resolver.registry().subsystem_defaults() {
                let (global_tag, era) = resolver.get_era_and_conditions(pinned)?;
                println!("{subsystem}: {pinned} ok ({global_tag}, {era})");
            }
        }

        Ok(0)
    }
}
