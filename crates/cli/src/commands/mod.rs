mod check;
mod list;
mod resolve;

pub use check::CheckCommand;
pub use list::ListCommand;
pub use resolve::ResolveCommand;

use anyhow::{bail, Result};
use detcond_core::resolver::engine::ResolutionError;

/// Output format shared by the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

pub fn parse_output_format(raw: &str) -> Result<OutputFormat> {
    match raw {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "yaml" => Ok(OutputFormat::Yaml),
        other => bail!("Unknown output format '{other}' (expected human, json, or yaml)"),
    }
}

/// Print an unknown-version failure, with the nearest-tag hint when the
/// diagnostic has one.
pub(crate) fn report_resolution_failure(error: &ResolutionError) {
    eprintln!("{error}");
    if let ResolutionError::UnknownVersion { diagnostic } = error {
        if let Some(suggestion) = &diagnostic.suggestion {
            eprintln!("hint: did you mean '{suggestion}'?");
        }
    }
}
