//! Locating `generate.toml` by walking up from a start directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{CONFIG_FILE_NAME, Config};
use crate::{Error, Result};

/// Walk from `start` up to the filesystem root and return the first
/// directory that contains `generate.toml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}

impl Config {
    /// Discover the configuration starting from the working directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Box::new(Error::WorkingDir { source: e }))?;
        Self::discover(&cwd)
    }

    /// Discover the configuration starting from `start`.
    ///
    /// Falls back to the default layout rooted at `start` when no
    /// `generate.toml` exists in `start` or any of its ancestors.
    pub fn discover(start: &Path) -> Result<Self> {
        match find_project_root(start) {
            Some(root) => {
                let path = root.join(CONFIG_FILE_NAME);
                debug!(path = %path.display(), "loading project configuration");
                Self::from_file(path)
            }
            None => {
                info!(
                    start = %start.display(),
                    "{} not found, using defaults",
                    CONFIG_FILE_NAME
                );
                Ok(Self::with_defaults(start))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CONFIG: &str = r#"
[input]
path = "my_assets"
[output]
path = "my_pages"
[template]
path = "my_templates"
"#;

    #[test]
    fn test_finds_config_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("subdir").join("deeper");
        fs::create_dir_all(&sub).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), CONFIG).unwrap();

        assert_eq!(find_project_root(&sub).as_deref(), Some(temp.path()));

        let config = Config::discover(&sub).unwrap();
        assert_eq!(config.project_root, temp.path());
        assert_eq!(config.assets_dir, temp.path().join("my_assets"));
        assert_eq!(config.pages_dir, temp.path().join("my_pages"));
        assert_eq!(config.template_dir, temp.path().join("my_templates"));
        assert_eq!(config.schema_dir, temp.path().join("schemas"));
    }

    #[test]
    fn test_closest_config_wins() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), CONFIG).unwrap();
        fs::write(inner.join(CONFIG_FILE_NAME), CONFIG).unwrap();

        let config = Config::discover(&inner).unwrap();
        assert_eq!(config.project_root, inner);
    }

    #[test]
    fn test_defaults_when_not_found() {
        let temp = TempDir::new().unwrap();

        // An ancestor of the temp dir could hold a stray generate.toml
        if find_project_root(temp.path()).is_some() {
            return;
        }

        let config = Config::discover(temp.path()).unwrap();
        assert_eq!(config, Config::with_defaults(temp.path()));
        assert_eq!(config.assets_dir, temp.path().join("assets"));
        assert_eq!(config.pages_dir, temp.path().join("pages"));
        assert_eq!(config.template_dir, temp.path().join("templates"));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[input]\n").unwrap();

        let err = Config::discover(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::MissingPath { .. }));
    }
}
