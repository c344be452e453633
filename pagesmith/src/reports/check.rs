//! Check command report data structures.

use super::{
    SkippedEntry,
    build::plural,
    output::{Output, Report},
};

/// Report data from descriptor validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Number of descriptors that would produce a page.
    pub valid: usize,
    /// Descriptors that failed, with reasons.
    pub errors: Vec<SkippedEntry>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.errors {
            out.error(&format!("{}: {}", entry.path, entry.reason));
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} valid",
                plural(self.valid, "descriptor")
            ));
        } else {
            out.newline();
            out.preformatted(&format!(
                "✗ {} of {} failed",
                self.errors.len(),
                plural(self.valid + self.errors.len(), "descriptor")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_failures() {
        let report = CheckReport {
            valid: 2,
            errors: vec![SkippedEntry {
                path: "assets/x/index.ini".to_string(),
                reason: "could not load schema 'ghost'".to_string(),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "error: assets/x/index.ini: could not load schema 'ghost'",
                "",
                "✗ 1 of 3 descriptors failed",
            ]
        );
    }

    #[test]
    fn test_render_all_valid() {
        let report = CheckReport {
            valid: 1,
            errors: vec![],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["✓ 1 descriptor valid"]);
    }
}
