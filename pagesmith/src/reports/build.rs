//! Build command report data structures.

use super::{
    SkippedEntry,
    output::{Output, Report},
};

/// Report data from a build.
#[derive(Debug)]
pub struct BuildReport {
    /// Pages directory, relative to the project root when possible.
    pub pages_dir: String,
    /// Number of stale generated pages removed before generating.
    pub cleared: usize,
    /// Pages written.
    pub generated: Vec<String>,
    /// Descriptors that were skipped.
    pub skipped: Vec<SkippedEntry>,
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        if self.cleared > 0 {
            out.key_value("Cleared", &plural(self.cleared, "stale page"));
        }

        if !self.generated.is_empty() {
            out.section("Generated");
            for page in &self.generated {
                out.added_item(page);
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for entry in &self.skipped {
                out.list_item(&format!("{}: {}", entry.path, entry.reason));
            }
        }

        out.newline();
        let mut summary = format!(
            "✓ {} in {}",
            plural(self.generated.len(), "page"),
            self.pages_dir
        );
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", {} skipped", self.skipped.len()));
        }
        out.preformatted(&summary);
    }
}

pub(super) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_with_skipped() {
        let report = BuildReport {
            pages_dir: "pages".to_string(),
            cleared: 2,
            generated: vec!["pages/cat.md".to_string()],
            skipped: vec![SkippedEntry {
                path: "assets/dog/index.ini".to_string(),
                reason: "validation failed".to_string(),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Cleared: 2 stale pages",
                "Generated:",
                "  + pages/cat.md",
                "",
                "Skipped:",
                "  - assets/dog/index.ini: validation failed",
                "",
                "✓ 1 page in pages, 1 skipped",
            ]
        );
    }

    #[test]
    fn test_render_empty_tree() {
        let report = BuildReport {
            pages_dir: "pages".to_string(),
            cleared: 0,
            generated: vec![],
            skipped: vec![],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["", "✓ 0 pages in pages"]);
    }
}
