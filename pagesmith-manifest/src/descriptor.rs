//! Asset descriptors (`index.ini`).

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use pagesmith_core::trim_quotes;

use crate::{Error, Result, ini::Ini};

/// File name of an asset descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "index.ini";

/// Section holding the generation directives.
pub const HEADER_SECTION: &str = "header";

/// Section holding the page properties.
pub const PROPERTIES_SECTION: &str = "properties";

/// Generation directives from the `[header]` section.
///
/// A directive counts as set when its key is present, even with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Schema name, without extension
    pub schema: Option<String>,

    /// Template name, without extension
    pub template: Option<String>,

    /// Content file name, relative to the descriptor's directory
    pub content: Option<String>,
}

/// Where the body of a page comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySource<'a> {
    /// Render the named template
    Template(&'a str),
    /// Include the named file verbatim
    Content(&'a str),
    /// Properties-only page
    Empty,
}

/// One asset's directives and properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    /// Header directives
    pub header: Header,

    /// Properties in declaration order
    pub properties: IndexMap<String, String>,
}

impl FromStr for Descriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DESCRIPTOR_FILE_NAME)
    }
}

impl Descriptor {
    /// Parse a descriptor file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a descriptor with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let mut ini = Ini::parse(content, filename)?;

        let header = match ini.section(HEADER_SECTION) {
            Some(section) => Header {
                schema: section.get("schema").cloned(),
                template: section.get("template").cloned(),
                content: section.get("content").cloned(),
            },
            None => Header::default(),
        };

        Ok(Self {
            header,
            properties: ini.take_section(PROPERTIES_SECTION),
        })
    }

    /// Body source for this descriptor. `template` wins over `content`.
    pub fn body_source(&self) -> BodySource<'_> {
        if let Some(template) = &self.header.template {
            BodySource::Template(template)
        } else if let Some(content) = &self.header.content {
            BodySource::Content(trim_quotes(content))
        } else {
            BodySource::Empty
        }
    }
}
