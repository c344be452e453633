//! The marker line that tags pages written by pagesmith.

use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// First line of every generated page.
pub const GENERATED_MARKER: &str = "generated:: true";

/// Check whether the file at `path` starts with the generated marker.
///
/// Surrounding whitespace on the first line is ignored. An empty file is
/// not generated.
pub fn is_generated(path: &Path) -> io::Result<bool> {
    let file = fs::File::open(path)?;
    let mut first_line = Vec::new();
    let read = BufReader::new(file).read_until(b'\n', &mut first_line)?;
    if read == 0 {
        return Ok(false);
    }
    Ok(first_line.trim_ascii() == GENERATED_MARKER.as_bytes())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn check(content: impl AsRef<[u8]>) -> bool {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.md");
        fs::write(&path, content).unwrap();
        is_generated(&path).unwrap()
    }

    #[test]
    fn test_marker_on_first_line() {
        assert!(check("generated:: true\nkey:: value\n"));
        assert!(check("generated:: true"));
        assert!(check("  generated:: true  \r\nrest"));
    }

    #[test]
    fn test_not_generated() {
        assert!(!check(""));
        assert!(!check("# My notes\ngenerated:: true\n"));
        assert!(!check("generated:: false\n"));
        assert!(!check("generated::true\n"));
    }

    #[test]
    fn test_non_utf8_first_line() {
        assert!(!check(b"\xff\xfe notes\ngenerated:: true\n"));
        assert!(check(b"generated:: true\n\xff\xfe\n"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(is_generated(&temp.path().join("nope.md")).is_err());
    }
}
