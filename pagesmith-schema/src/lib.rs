//! Property schemas for pagesmith.
//!
//! A schema declares, per property name, a type, whether the property is
//! required, an optional default and (for enums) the accepted keys with
//! their display text. Schemas are loaded from YAML or JSON files and
//! applied to the raw properties of a descriptor with [`Schema::validate`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod load;
mod model;
mod validate;

pub use error::{Result, SchemaError, ValidationError};
pub use load::SchemaStore;
pub use model::{PropertyRule, PropertyType, Scalar, Schema};
pub use validate::PropertyMap;
