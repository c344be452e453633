//! Clear operation - remove generated pages.

use eyre::Result;
use pagesmith_codegen::Generator;
use pagesmith_manifest::Config;

use super::display_path;
use crate::reports::{ClearReport, SkippedEntry};

/// Execute the clear operation.
pub fn clear(config: Config, dry_run: bool) -> Result<ClearReport> {
    let root = config.project_root.clone();
    let pages_dir = display_path(&root, &config.pages_dir);

    let result = Generator::new(config).clear(dry_run)?;

    Ok(ClearReport {
        pages_dir,
        dry_run,
        pages_dir_missing: result.pages_dir_missing,
        removed: result
            .removed
            .iter()
            .map(|path| display_path(&root, path))
            .collect(),
        failed: result
            .failed
            .into_iter()
            .map(|failure| SkippedEntry {
                path: display_path(&root, &failure.path),
                reason: failure.reason,
            })
            .collect(),
    })
}
