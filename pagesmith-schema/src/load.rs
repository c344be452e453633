//! Schema parsing from YAML/JSON and lookup by name.

use std::path::{Path, PathBuf};

use miette::SourceSpan;

use crate::{
    error::{Result, SchemaError, SourceContext},
    model::{RawSchema, Schema, TypeError},
};

impl Schema {
    /// Parse a YAML schema with a filename for error reporting.
    pub fn from_yaml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawSchema = serde_yaml::from_str(content).map_err(|e| {
            let offset = e.location().map(|l| l.index());
            ctx.parse_error(e.to_string(), offset)
        })?;
        resolve(raw, &ctx)
    }

    /// Parse a JSON schema with a filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawSchema = serde_json::from_str(content).map_err(|e| {
            let offset = offset_of(content, e.line(), e.column());
            ctx.parse_error(e.to_string(), offset)
        })?;
        resolve(raw, &ctx)
    }

    /// Load a schema file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(SchemaError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content, &filename)
        } else {
            Self::from_yaml_str(&content, &filename)
        }
    }
}

fn resolve(raw: RawSchema, ctx: &SourceContext) -> Result<Schema> {
    let mut types = std::collections::BTreeMap::new();

    for (name, rule) in raw.types {
        let type_name = rule.type_name.clone();
        match rule.resolve() {
            Ok(resolved) => {
                types.insert(name, resolved);
            }
            Err(TypeError::Unknown) => {
                let span = find_property_span(ctx.src(), &name);
                return Err(ctx.unknown_type_error(name, type_name, span));
            }
            Err(TypeError::EmptyEnumKeys) => {
                let span = find_property_span(ctx.src(), &name);
                return Err(ctx.empty_enum_error(name, span));
            }
        }
    }

    Ok(Schema {
        version: raw.version,
        types,
    })
}

/// Byte offset of a 1-based line/column position, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    Some(src.len())
}

/// Find the span of a property key in YAML (`name:`) or JSON (`"name"`) source.
fn find_property_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    let key = format!("{}:", name);
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with(&key) {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, name.len())));
        }
        offset += line.len();
    }
    None
}

/// Locates schema files by name inside a schema directory.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    dir: PathBuf,
}

impl SchemaStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the schema named `name`: `<name>.yaml` if it exists, else `<name>.json`.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        let yaml = self.dir.join(format!("{}.yaml", name));
        if yaml.is_file() {
            return Ok(yaml);
        }
        let json = self.dir.join(format!("{}.json", name));
        if json.is_file() {
            return Ok(json);
        }
        Err(Box::new(SchemaError::NotFound {
            name: name.to_string(),
            dir: self.dir.display().to_string(),
        }))
    }

    /// Locate and load the schema named `name`.
    pub fn load(&self, name: &str) -> Result<Schema> {
        let path = self.locate(name)?;
        Schema::from_file(path)
    }
}
