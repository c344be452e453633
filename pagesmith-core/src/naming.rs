//! Mapping from asset paths to page names.

use std::path::{Component, Path};

/// Extension of generated pages (without the dot).
pub const PAGE_EXTENSION: &str = "md";

/// Joiner that replaces path separators in page names.
pub const PATH_JOINER: &str = "___";

/// Page name of the asset root itself.
pub const ROOT_PAGE_NAME: &str = "index";

fn segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Page name (without extension) for an asset-root-relative directory.
///
/// `a/b/c` becomes `a___b___c`; the root (`""` or `"."`) becomes `index`.
pub fn page_name(relative: &Path) -> String {
    let parts = segments(relative);
    if parts.is_empty() {
        ROOT_PAGE_NAME.to_string()
    } else {
        parts.join(PATH_JOINER)
    }
}

/// Forward-slash form of an asset-root-relative directory.
///
/// The root is reported as `"."`.
pub fn current_path(relative: &Path) -> String {
    let parts = segments(relative);
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
