use std::{error::Error as StdError, path::PathBuf};

use pagesmith_schema::{SchemaError, ValidationError};
use thiserror::Error;

/// Why a single descriptor could not be turned into a page.
///
/// These errors are contained: the descriptor is skipped and the run goes on.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid descriptor")]
    Descriptor(#[source] Box<pagesmith_manifest::Error>),

    #[error("descriptor '{path}' is outside the asset root")]
    OutsideAssetRoot { path: PathBuf },

    #[error("could not load schema '{name}'")]
    Schema {
        name: String,
        #[source]
        source: Box<SchemaError>,
    },

    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("could not read template '{name}' from '{path}'")]
    TemplateRead {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse template '{name}'")]
    TemplateParse {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("could not render template '{name}'")]
    TemplateRender {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("content file '{path}' not found")]
    ContentFileNotFound { path: PathBuf },

    #[error("could not read content file '{path}'")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One-line description of an error and all of its sources.
pub fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_includes_sources() {
        let err = PageError::Validation(ValidationError::InvalidNumber {
            name: "rating".to_string(),
            value: "ten".to_string(),
        });

        assert_eq!(
            describe(&err),
            "validation failed: property 'rating' with value 'ten' is not a valid number"
        );
    }

    #[test]
    fn test_describe_without_source() {
        let err = PageError::ContentFileNotFound {
            path: PathBuf::from("assets/a/index.md"),
        };
        assert_eq!(describe(&err), "content file 'assets/a/index.md' not found");
    }
}
