//! Core operations.
//!
//! This module contains the business logic for pagesmith commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod clear;

use std::path::Path;

pub use build::build;
pub use check::check;
pub use clear::clear;

/// `path` relative to `root` when it lies inside it, otherwise as given.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path() {
        let root = Path::new("/project");
        assert_eq!(
            display_path(root, Path::new("/project/assets/a/index.ini")),
            "assets/a/index.ini"
        );
        assert_eq!(display_path(root, Path::new("/other/x.md")), "/other/x.md");
    }
}
