//! Clear command report data structures.

use super::{
    SkippedEntry,
    output::{Output, Report},
};

/// Report data from clearing generated pages.
#[derive(Debug)]
pub struct ClearReport {
    pub pages_dir: String,
    /// Whether this was a dry run.
    pub dry_run: bool,
    pub pages_dir_missing: bool,
    /// Removed pages (or pages that would be removed).
    pub removed: Vec<String>,
    /// Pages that could not be read or removed.
    pub failed: Vec<SkippedEntry>,
}

impl Report for ClearReport {
    fn render(&self, out: &mut dyn Output) {
        if self.pages_dir_missing {
            out.preformatted(&format!(
                "Pages directory {} does not exist, nothing to clear.",
                self.pages_dir
            ));
            return;
        }

        for entry in &self.failed {
            out.warning(&format!("{}: {}", entry.path, entry.reason));
        }

        if self.removed.is_empty() {
            out.preformatted("No generated pages found.");
            return;
        }

        if self.dry_run {
            out.section("Would remove");
        } else {
            out.section("Removed");
        }
        for path in &self.removed {
            out.removed_item(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(dry_run: bool, removed: &[&str]) -> ClearReport {
        ClearReport {
            pages_dir: "pages".to_string(),
            dry_run,
            pages_dir_missing: false,
            removed: removed.iter().map(|s| s.to_string()).collect(),
            failed: vec![],
        }
    }

    #[test]
    fn test_dry_run_heading() {
        let mut out = RecordingOutput::default();
        report(true, &["pages/a.md"]).render(&mut out);
        assert_eq!(out.lines, vec!["Would remove:", "  - pages/a.md"]);
    }

    #[test]
    fn test_nothing_to_clear() {
        let mut out = RecordingOutput::default();
        report(false, &[]).render(&mut out);
        assert_eq!(out.lines, vec!["No generated pages found."]);
    }
}
