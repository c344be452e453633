//! Page assembly.
//!
//! A page body is laid out as:
//!
//! ```text
//! <declared property lines, in descriptor order>
//! <remaining property lines, in name order>
//! <blank line>
//! <rendered template or content file bytes>
//! ```
//!
//! The generated marker line is not part of the body. It is the file
//! header declared by [`Page::rules`] and prepended on write.

use std::{
    collections::HashSet,
    fmt::Write as _,
    path::{Path, PathBuf},
};

use pagesmith_core::{FileRules, GENERATED_MARKER, GeneratedFile, PAGE_EXTENSION};
use pagesmith_schema::PropertyMap;

/// Render `key:: value` lines.
///
/// Keys from `declared` are emitted first, in that order, when present in
/// `values`. Keys only present in `values` (schema defaults) follow in
/// ascending name order. Every key is emitted exactly once.
pub fn render_properties<'a>(
    declared: impl IntoIterator<Item = &'a str>,
    values: &PropertyMap,
) -> String {
    let mut out = String::new();
    let mut emitted = HashSet::new();

    for key in declared {
        if let Some(value) = values.get(key)
            && emitted.insert(key)
        {
            let _ = writeln!(out, "{key}:: {value}");
        }
    }

    for (key, value) in values {
        if !emitted.contains(key.as_str()) {
            let _ = writeln!(out, "{key}:: {value}");
        }
    }

    out
}

/// A fully assembled page, ready to be written to the pages directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    name: String,
    body: Vec<u8>,
}

impl Page {
    pub fn assemble<'a>(
        name: impl Into<String>,
        declared: impl IntoIterator<Item = &'a str>,
        values: &PropertyMap,
        content: &[u8],
    ) -> Self {
        let mut body = render_properties(declared, values).into_bytes();
        body.push(b'\n');
        body.extend_from_slice(content);
        Self {
            name: name.into(),
            body,
        }
    }

    /// File name of the page, e.g. `cat___sub.md` or `index.md`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, PAGE_EXTENSION)
    }

    /// Page text without the generated marker.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl GeneratedFile for Page {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(GENERATED_MARKER)
    }

    fn render(&self) -> Vec<u8> {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_declared_order_is_kept() {
        let out = render_properties(
            ["zeta", "alpha", "mid"],
            &values(&[("alpha", "1"), ("mid", "2"), ("zeta", "3")]),
        );
        assert_eq!(out, "zeta:: 3\nalpha:: 1\nmid:: 2\n");
    }

    #[test]
    fn test_remainder_follows_in_name_order() {
        let out = render_properties(
            ["title"],
            &values(&[("title", "Cat"), ("status", "[[draft]]"), ("author", "me")]),
        );
        assert_eq!(out, "title:: Cat\nauthor:: me\nstatus:: [[draft]]\n");
    }

    #[test]
    fn test_declared_without_value_is_skipped() {
        let out = render_properties(["missing", "a"], &values(&[("a", "1")]));
        assert_eq!(out, "a:: 1\n");
    }

    #[test]
    fn test_assemble_layout() {
        let page = Page::assemble("cat", ["key1"], &values(&[("key1", "value1")]), b"body\n");
        assert_eq!(page.body(), b"key1:: value1\n\nbody\n");
        assert_eq!(page.file_name(), "cat.md");
    }

    #[test]
    fn test_empty_page_has_separator_only() {
        let page = Page::assemble("index", std::iter::empty(), &PropertyMap::new(), b"");
        assert_eq!(page.body(), b"\n");
        assert_eq!(page.contents(), b"generated:: true\n\n");
    }

    #[test]
    fn test_path_and_header() {
        let page = Page::assemble("a___b", ["k"], &values(&[("k", "v")]), b"");
        assert_eq!(page.path(Path::new("/pages")), Path::new("/pages/a___b.md"));
        assert_eq!(page.contents(), b"generated:: true\nk:: v\n\n");
    }
}
