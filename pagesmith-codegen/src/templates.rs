//! Template loading and rendering.
//!
//! Templates live in the template directory as `<name>.template` and are
//! rendered with Handlebars in strict mode. Output is not HTML-escaped.
//! The render context exposes two fields:
//!
//! - `CurrentPath`: the descriptor directory relative to the asset root
//!   with `/` separators, or `.` for the root itself
//! - `Properties`: the validated property map, e.g. `{{Properties.title}}`

use std::path::PathBuf;

use handlebars::Handlebars;
use pagesmith_schema::PropertyMap;
use serde::Serialize;
use tracing::debug;

use crate::PageError;

pub const TEMPLATE_EXTENSION: &str = "template";

/// Data a template is rendered against.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    #[serde(rename = "CurrentPath")]
    pub current_path: &'a str,
    #[serde(rename = "Properties")]
    pub properties: &'a PropertyMap,
}

/// Parsed templates, keyed by name.
///
/// A template is read and parsed the first time it is requested and reused
/// for the rest of the run. Failed loads are not cached.
pub struct TemplateCache {
    dir: PathBuf,
    registry: Handlebars<'static>,
}

impl TemplateCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            dir: dir.into(),
            registry,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    pub fn len(&self) -> usize {
        self.registry.get_templates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make sure `name` is parsed and registered.
    pub fn load(&mut self, name: &str) -> Result<(), PageError> {
        if self.contains(name) {
            return Ok(());
        }

        let path = self.path_for(name);
        debug!(template = name, path = %path.display(), "loading template");
        let source = std::fs::read_to_string(&path).map_err(|e| PageError::TemplateRead {
            name: name.to_string(),
            path: path.clone(),
            source: e,
        })?;
        self.registry
            .register_template_string(name, source)
            .map_err(|e| PageError::TemplateParse {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    pub fn render(&mut self, name: &str, context: &RenderContext<'_>) -> Result<String, PageError> {
        self.load(name)?;
        self.registry
            .render(name, context)
            .map_err(|e| PageError::TemplateRender {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}
