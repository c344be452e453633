//! Build operation - regenerate every page.

use eyre::Result;
use pagesmith_codegen::Generator;
use pagesmith_manifest::Config;

use super::display_path;
use crate::reports::{BuildReport, SkippedEntry};

/// Execute the build operation.
///
/// Clears previously generated pages and writes one page per descriptor.
pub fn build(config: Config) -> Result<BuildReport> {
    let root = config.project_root.clone();
    let pages_dir = display_path(&root, &config.pages_dir);

    let mut generator = Generator::new(config);
    let result = generator.build()?;

    Ok(BuildReport {
        pages_dir,
        cleared: result.cleared.removed.len(),
        generated: result
            .generated
            .iter()
            .map(|page| display_path(&root, &page.output))
            .collect(),
        skipped: result
            .skipped
            .into_iter()
            .map(|failure| SkippedEntry {
                path: display_path(&root, &failure.path),
                reason: failure.reason,
            })
            .collect(),
    })
}
