use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "index.ini");
/// ctx.syntax_error(3, "key-value delimiter not found", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            source,
        })
    }

    /// Create a syntax error for an INI line.
    pub fn syntax_error(
        &self,
        line: usize,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: span.into(),
            filename: self.filename.clone(),
            line,
            message: message.into(),
        })
    }

    /// Create a missing path error.
    pub fn missing_path_error(&self, key: impl Into<String>) -> Box<Error> {
        Box::new(Error::MissingPath {
            src: self.named_source(),
            filename: self.filename.clone(),
            key: key.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(pagesmith::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine the working directory")]
    #[diagnostic(code(pagesmith::working_dir))]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(pagesmith::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{filename}:{line}: {message}")]
    #[diagnostic(
        code(pagesmith::syntax_error),
        help("descriptor lines are `[section]`, `key = value` or comments starting with ';' or '#'")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        filename: String,
        line: usize,
        message: String,
    },

    #[error("'{key}' not set in {filename}")]
    #[diagnostic(
        code(pagesmith::missing_path),
        help("generate.toml must set input.path, output.path and template.path")
    )]
    MissingPath {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
        key: String,
    },
}
