//! Config parsing from files and strings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Config, DEFAULT_SCHEMA_DIR};
use crate::{Error, Result, error::SourceContext};

#[derive(Debug, Deserialize)]
struct RawConfig {
    input: Option<PathSection>,
    output: Option<PathSection>,
    template: Option<PathSection>,
    schema: Option<PathSection>,
}

#[derive(Debug, Deserialize)]
struct PathSection {
    #[serde(default)]
    path: String,
}

fn required_path(
    section: Option<PathSection>,
    key: &str,
    ctx: &SourceContext,
) -> Result<String> {
    match section {
        Some(s) if !s.path.is_empty() => Ok(s.path),
        _ => Err(ctx.missing_path_error(key)),
    }
}

impl Config {
    /// Load a `generate.toml`; its directory becomes the project root.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::from_str_with_root(&content, &path.display().to_string(), root)
    }

    /// Parse config content, joining every configured path onto `root`.
    pub fn from_str_with_root(
        content: &str,
        filename: &str,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        let root = root.into();

        let assets = required_path(raw.input, "input.path", &ctx)?;
        let pages = required_path(raw.output, "output.path", &ctx)?;
        let templates = required_path(raw.template, "template.path", &ctx)?;
        let schemas = raw
            .schema
            .map(|s| s.path)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEMA_DIR.to_string());

        Ok(Self {
            assets_dir: root.join(assets),
            pages_dir: root.join(pages),
            template_dir: root.join(templates),
            schema_dir: root.join(schemas),
            project_root: root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = Config::from_str_with_root(
            r#"
            [input]
            path = "my_assets"
            [output]
            path = "my_pages"
            [template]
            path = "my_templates"
            [schema]
            path = "my_schemas"
            "#,
            "generate.toml",
            "/project",
        )
        .unwrap();

        let root = Path::new("/project");
        assert_eq!(config.project_root, root);
        assert_eq!(config.assets_dir, root.join("my_assets"));
        assert_eq!(config.pages_dir, root.join("my_pages"));
        assert_eq!(config.template_dir, root.join("my_templates"));
        assert_eq!(config.schema_dir, root.join("my_schemas"));
    }

    #[test]
    fn test_schema_path_defaults() {
        let config = Config::from_str_with_root(
            "[input]\npath = \"a\"\n[output]\npath = \"p\"\n[template]\npath = \"t\"\n",
            "generate.toml",
            "/project",
        )
        .unwrap();

        assert_eq!(config.schema_dir, Path::new("/project").join("schemas"));
    }

    #[test]
    fn test_missing_required_path() {
        let err = Config::from_str_with_root(
            "[input]\npath = \"a\"\n[template]\npath = \"t\"\n",
            "generate.toml",
            "/project",
        )
        .unwrap_err();

        match *err {
            Error::MissingPath { ref key, .. } => assert_eq!(key, "output.path"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_path_is_missing() {
        let err = Config::from_str_with_root(
            "[input]\npath = \"\"\n[output]\npath = \"p\"\n[template]\npath = \"t\"\n",
            "generate.toml",
            "/project",
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "'input.path' not set in generate.toml");
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_str_with_root("[input\npath = 1", "generate.toml", "/p").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
