//! Project configuration (`generate.toml`).

mod discover;
mod parse;

use std::path::{Path, PathBuf};

pub use discover::find_project_root;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "generate.toml";

/// Default directory for input assets.
pub const DEFAULT_ASSETS_DIR: &str = "assets";
/// Default directory for output pages.
pub const DEFAULT_PAGES_DIR: &str = "pages";
/// Default directory for templates.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
/// Default directory for schemas.
pub const DEFAULT_SCHEMA_DIR: &str = "schemas";

/// Resolved project configuration. All directories are joined onto the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing `generate.toml` (or the start directory when none was found)
    pub project_root: PathBuf,

    /// Root of the asset descriptor tree
    pub assets_dir: PathBuf,

    /// Directory receiving generated pages
    pub pages_dir: PathBuf,

    /// Directory holding `<name>.template` files
    pub template_dir: PathBuf,

    /// Directory holding `<name>.yaml` / `<name>.json` schemas
    pub schema_dir: PathBuf,
}

impl Config {
    /// Default layout rooted at `root`.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            assets_dir: root.join(DEFAULT_ASSETS_DIR),
            pages_dir: root.join(DEFAULT_PAGES_DIR),
            template_dir: root.join(DEFAULT_TEMPLATE_DIR),
            schema_dir: root.join(DEFAULT_SCHEMA_DIR),
            project_root: root,
        }
    }

    /// Asset-root-relative path of `dir`, if it lies inside the asset root.
    pub fn relative_to_assets<'a>(&self, dir: &'a Path) -> Option<&'a Path> {
        dir.strip_prefix(&self.assets_dir).ok()
    }
}
