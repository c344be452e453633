//! Page assembly and generation for pagesmith.
//!
//! # Module Organization
//!
//! - [`page`] - Page assembly (property lines, separator, body)
//! - [`templates`] - Template loading, caching and rendering
//! - [`schemas`] - Per-run schema cache
//! - [`generator`] - Build, clear and check over an asset tree

mod discover;
mod error;
pub mod generator;
pub mod page;
mod results;
pub mod schemas;
pub mod templates;

pub use discover::find_descriptors;
pub use error::{PageError, describe};
pub use generator::Generator;
pub use page::{Page, render_properties};
pub use results::{BuildResult, CheckResult, ClearResult, Failure, GeneratedPage};
pub use schemas::SchemaCache;
pub use templates::{RenderContext, TEMPLATE_EXTENSION, TemplateCache};
