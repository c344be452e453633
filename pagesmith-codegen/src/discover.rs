use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use pagesmith_manifest::DESCRIPTOR_FILE_NAME;
use walkdir::WalkDir;

/// Every `index.ini` under `assets_dir`, in a stable walk order.
///
/// Symlinks are not followed. An unreadable entry aborts the walk.
pub fn find_descriptors(assets_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry
            .wrap_err_with(|| format!("error finding descriptors in {}", assets_dir.display()))?;
        if entry.file_type().is_file() && entry.file_name() == DESCRIPTOR_FILE_NAME {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
