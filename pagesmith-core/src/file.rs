use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body (without the header line)
    fn render(&self) -> Vec<u8>;

    /// Full file contents: the header line, if any, followed by the body
    fn contents(&self) -> Vec<u8> {
        let body = self.render();
        match self.rules().header {
            Some(header) => {
                let mut out = Vec::with_capacity(header.len() + 1 + body.len());
                out.extend_from_slice(header.as_bytes());
                out.push(b'\n');
                out.extend_from_slice(&body);
                out
            }
            None => body,
        }
    }

    /// Write the file to disk, returning the path that was written
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line written before the body
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules that put `header` on the first line
    pub fn with_header(header: &'static str) -> Self {
        Self {
            header: Some(header),
        }
    }
}
