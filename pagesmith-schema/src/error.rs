use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<SchemaError>>;

/// Source context for error reporting.
///
/// Carries the schema source and filename so that loading errors can point
/// at the offending part of the file.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error located at a byte offset.
    pub fn parse_error(&self, message: impl Into<String>, offset: Option<usize>) -> Box<SchemaError> {
        Box::new(SchemaError::Parse {
            src: self.named_source(),
            span: offset.map(|o| SourceSpan::from((o.min(self.src.len()), 0))),
            filename: self.filename.clone(),
            message: message.into(),
        })
    }

    /// Create an unknown type error.
    pub fn unknown_type_error(
        &self,
        property: impl Into<String>,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::UnknownType {
            src: self.named_source(),
            span,
            property: property.into(),
            ty: ty.into(),
        })
    }

    /// Create an empty enum keys error.
    pub fn empty_enum_error(
        &self,
        property: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::EmptyEnumKeys {
            src: self.named_source(),
            span,
            property: property.into(),
        })
    }
}

/// Errors raised while locating or loading a schema.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("failed to read schema '{path}'")]
    #[diagnostic(code(pagesmith::schema::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema '{name}' not found")]
    #[diagnostic(
        code(pagesmith::schema::not_found),
        help("expected '{name}.yaml' or '{name}.json' in '{dir}'")
    )]
    NotFound { name: String, dir: String },

    #[error("failed to parse {filename}: {message}")]
    #[diagnostic(code(pagesmith::schema::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        filename: String,
        message: String,
    },

    #[error("unknown type '{ty}' for property '{property}'")]
    #[diagnostic(
        code(pagesmith::schema::unknown_type),
        help("valid types are: string, number, boolean, enum, link, date")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        property: String,
        ty: String,
    },

    #[error("enum property '{property}' has no keys")]
    #[diagnostic(
        code(pagesmith::schema::empty_enum),
        help("list the accepted values under 'keys', each with a 'display' text")
    )]
    EmptyEnumKeys {
        #[source_code]
        src: NamedSource<String>,
        #[label("enum declared here")]
        span: Option<SourceSpan>,
        property: String,
    },
}

/// A property value rejected by a schema.
///
/// Validation stops at the first error, so exactly one is reported per
/// property set.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("required property '{name}' is missing")]
    #[diagnostic(code(pagesmith::validate::missing_required))]
    MissingRequiredProperty { name: String },

    #[error("property '{name}' with value '{value}' is not a valid number")]
    #[diagnostic(code(pagesmith::validate::invalid_number))]
    InvalidNumber { name: String, value: String },

    #[error("property '{name}' with value '{value}' is not a valid boolean")]
    #[diagnostic(
        code(pagesmith::validate::invalid_boolean),
        help("use true or false")
    )]
    InvalidBoolean { name: String, value: String },

    #[error("property '{name}' with value '{value}' is not a valid enum key")]
    #[diagnostic(code(pagesmith::validate::invalid_enum_key))]
    InvalidEnumKey { name: String, value: String },

    #[error("property '{name}' with value '{value}' is not a valid date in YYYY-MM-DD format")]
    #[diagnostic(code(pagesmith::validate::invalid_date))]
    InvalidDate { name: String, value: String },
}

impl ValidationError {
    /// Name of the property that failed validation.
    pub fn property(&self) -> &str {
        match self {
            ValidationError::MissingRequiredProperty { name }
            | ValidationError::InvalidNumber { name, .. }
            | ValidationError::InvalidBoolean { name, .. }
            | ValidationError::InvalidEnumKey { name, .. }
            | ValidationError::InvalidDate { name, .. } => name,
        }
    }
}
