//! Asset descriptor and project configuration parsing for pagesmith.
//!
//! Descriptors (`index.ini`) are read with an order-preserving INI reader
//! so that pages list properties in the order they were declared. The
//! project configuration (`generate.toml`) is discovered by walking up
//! from the working directory.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod descriptor;
mod error;
mod ini;

pub use config::{
    CONFIG_FILE_NAME, Config, DEFAULT_ASSETS_DIR, DEFAULT_PAGES_DIR, DEFAULT_SCHEMA_DIR,
    DEFAULT_TEMPLATE_DIR, find_project_root,
};
pub use descriptor::{
    BodySource, DESCRIPTOR_FILE_NAME, Descriptor, HEADER_SECTION, Header, PROPERTIES_SECTION,
};
pub use error::{Error, Result, SourceContext};
pub use ini::{DEFAULT_SECTION, Ini, Section};
