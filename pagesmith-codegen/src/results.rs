use std::path::PathBuf;

/// A descriptor that produced a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub descriptor: PathBuf,
    /// Written file for builds, would-be output for checks
    pub output: PathBuf,
}

/// A file that could not be processed, with a one-line reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of clearing generated pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearResult {
    pub dry_run: bool,
    /// The pages directory did not exist, nothing was done
    pub pages_dir_missing: bool,
    /// Pages removed (or that would be removed on a dry run)
    pub removed: Vec<PathBuf>,
    pub failed: Vec<Failure>,
}

/// Result of a full build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    pub cleared: ClearResult,
    pub generated: Vec<GeneratedPage>,
    pub skipped: Vec<Failure>,
}

/// Result of checking descriptors without writing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub valid: Vec<GeneratedPage>,
    pub invalid: Vec<Failure>,
}

impl CheckResult {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty()
    }
}
