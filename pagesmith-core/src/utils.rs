//! Shared string utilities.

/// Strip every leading and trailing double quote (e.g. `"index.md"` -> `index.md`)
pub fn trim_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_quotes() {
        assert_eq!(trim_quotes("\"index.md\""), "index.md");
        assert_eq!(trim_quotes("index.md"), "index.md");
        assert_eq!(trim_quotes("\"\"notes.md\""), "notes.md");
        assert_eq!(trim_quotes("it's \"quoted\" inside"), "it's \"quoted\" inside");
        assert_eq!(trim_quotes(""), "");
    }
}
