//! The build pipeline: clear stale pages, walk the asset tree, assemble
//! and write one page per descriptor.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use pagesmith_core::{GeneratedFile, PAGE_EXTENSION, current_path, is_generated, page_name};
use pagesmith_manifest::{BodySource, Config, Descriptor};
use pagesmith_schema::PropertyMap;
use tracing::{debug, info, warn};

use crate::{
    BuildResult, CheckResult, ClearResult, Failure, GeneratedPage, Page, PageError, RenderContext,
    SchemaCache, TemplateCache, describe, find_descriptors,
};

/// Generates pages for one project configuration.
///
/// Schemas and templates are cached for the lifetime of the generator.
pub struct Generator {
    config: Config,
    schemas: SchemaCache,
    templates: TemplateCache,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let schemas = SchemaCache::new(&config.schema_dir);
        let templates = TemplateCache::new(&config.template_dir);
        Self {
            config,
            schemas,
            templates,
        }
    }

    pub fn schemas(&self) -> &SchemaCache {
        &self.schemas
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.templates
    }

    /// Assemble the page for a single `index.ini` without writing it.
    pub fn render_page(&mut self, descriptor_path: &Path) -> Result<Page, PageError> {
        let dir = descriptor_path.parent().unwrap_or(Path::new(""));
        let relative =
            self.config
                .relative_to_assets(dir)
                .ok_or_else(|| PageError::OutsideAssetRoot {
                    path: descriptor_path.to_path_buf(),
                })?;

        debug!(descriptor = %descriptor_path.display(), "processing descriptor");
        let descriptor = Descriptor::from_file(descriptor_path).map_err(PageError::Descriptor)?;

        let raw: PropertyMap = descriptor
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let values = match &descriptor.header.schema {
            Some(name) => self.schemas.get(name)?.validate(&raw)?,
            None => raw,
        };

        let current = current_path(relative);
        let content = match descriptor.body_source() {
            BodySource::Template(name) => self
                .templates
                .render(
                    name,
                    &RenderContext {
                        current_path: &current,
                        properties: &values,
                    },
                )?
                .into_bytes(),
            BodySource::Content(file) => read_content(&dir.join(file))?,
            BodySource::Empty => Vec::new(),
        };

        Ok(Page::assemble(
            page_name(relative),
            descriptor.properties.keys().map(String::as_str),
            &values,
            &content,
        ))
    }

    /// Clear generated pages, then regenerate every page in the asset tree.
    ///
    /// Descriptors that fail are logged and skipped. Only failing to clear,
    /// create the pages directory or walk the asset tree aborts the build.
    pub fn build(&mut self) -> Result<BuildResult> {
        let cleared = self.clear(false)?;

        let pages_dir = self.config.pages_dir.clone();
        fs::create_dir_all(&pages_dir).wrap_err_with(|| {
            format!("could not create pages directory {}", pages_dir.display())
        })?;

        info!(assets = %self.config.assets_dir.display(), "generating pages");
        let descriptors = find_descriptors(&self.config.assets_dir)?;

        let mut result = BuildResult {
            cleared,
            ..Default::default()
        };
        for descriptor in descriptors {
            let page = match self.render_page(&descriptor) {
                Ok(page) => page,
                Err(e) => {
                    let reason = describe(&e);
                    warn!(descriptor = %descriptor.display(), "[SKIP] {reason}");
                    result.skipped.push(Failure {
                        path: descriptor,
                        reason,
                    });
                    continue;
                }
            };

            match page.write(&pages_dir) {
                Ok(output) => {
                    info!(page = %output.display(), "generated");
                    result.generated.push(GeneratedPage { descriptor, output });
                }
                Err(e) => {
                    let reason = format!("could not write {}: {e}", page.file_name());
                    warn!(descriptor = %descriptor.display(), "[SKIP] {reason}");
                    result.skipped.push(Failure {
                        path: descriptor,
                        reason,
                    });
                }
            }
        }

        info!(
            generated = result.generated.len(),
            skipped = result.skipped.len(),
            "build finished"
        );
        Ok(result)
    }

    /// Remove every page in the pages directory whose first line is the
    /// generated marker. Hand-written pages are left alone.
    ///
    /// A missing pages directory is not an error. Per-file failures are
    /// logged and collected.
    pub fn clear(&self, dry_run: bool) -> Result<ClearResult> {
        let pages_dir = &self.config.pages_dir;
        let mut result = ClearResult {
            dry_run,
            ..Default::default()
        };

        if !pages_dir.exists() {
            info!(pages = %pages_dir.display(), "pages directory does not exist, nothing to clear");
            result.pages_dir_missing = true;
            return Ok(result);
        }

        for path in page_files(pages_dir)? {
            match is_generated(&path) {
                Ok(false) => {}
                Ok(true) if dry_run => {
                    info!(page = %path.display(), "would remove");
                    result.removed.push(path);
                }
                Ok(true) => match fs::remove_file(&path) {
                    Ok(()) => {
                        info!(page = %path.display(), "removed");
                        result.removed.push(path);
                    }
                    Err(e) => {
                        warn!(page = %path.display(), "could not remove: {e}");
                        result.failed.push(Failure {
                            path,
                            reason: format!("could not remove: {e}"),
                        });
                    }
                },
                Err(e) => {
                    warn!(page = %path.display(), "could not read: {e}");
                    result.failed.push(Failure {
                        path,
                        reason: format!("could not read: {e}"),
                    });
                }
            }
        }

        Ok(result)
    }

    /// Assemble every page without touching the pages directory.
    pub fn check(&mut self) -> Result<CheckResult> {
        let descriptors = find_descriptors(&self.config.assets_dir)?;
        let mut result = CheckResult::default();

        for descriptor in descriptors {
            match self.render_page(&descriptor) {
                Ok(page) => {
                    let output = page.path(&self.config.pages_dir);
                    result.valid.push(GeneratedPage { descriptor, output });
                }
                Err(e) => {
                    let reason = describe(&e);
                    warn!(descriptor = %descriptor.display(), "{reason}");
                    result.invalid.push(Failure {
                        path: descriptor,
                        reason,
                    });
                }
            }
        }

        Ok(result)
    }
}

fn read_content(path: &Path) -> Result<Vec<u8>, PageError> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PageError::ContentFileNotFound {
            path: path.to_path_buf(),
        },
        _ => PageError::ContentRead {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Regular `*.md` files directly inside `dir`, sorted by path.
fn page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("could not list pages directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .wrap_err_with(|| format!("could not list pages directory {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PAGE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
