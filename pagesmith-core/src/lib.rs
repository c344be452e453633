//! Core utilities and types for the pagesmith page generator.
//!
//! This crate provides the generated-file primitives shared by the
//! other pagesmith crates: the marker line, page naming and file writing.

mod file;
mod marker;
mod naming;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile};
// Generated-page marker
pub use marker::{GENERATED_MARKER, is_generated};
// Page naming
pub use naming::{PAGE_EXTENSION, PATH_JOINER, ROOT_PAGE_NAME, current_path, page_name};
// String utilities
pub use utils::trim_quotes;
