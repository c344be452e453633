//! Check operation - descriptor validation.

use eyre::Result;
use pagesmith_codegen::Generator;
use pagesmith_manifest::Config;

use super::display_path;
use crate::reports::{CheckReport, SkippedEntry};

/// Execute the check operation.
///
/// Assembles every page in memory and collects the failures.
pub fn check(config: Config) -> Result<CheckReport> {
    let root = config.project_root.clone();
    let result = Generator::new(config).check()?;

    Ok(CheckReport {
        valid: result.valid.len(),
        errors: result
            .invalid
            .into_iter()
            .map(|failure| SkippedEntry {
                path: display_path(&root, &failure.path),
                reason: failure.reason,
            })
            .collect(),
    })
}
