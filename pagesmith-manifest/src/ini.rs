//! Order-preserving reader for INI-style descriptor files.

use indexmap::IndexMap;

use crate::{Result, error::SourceContext};

/// Section holding keys that appear before any `[section]` header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Keys and values of one section, in declaration order.
pub type Section = IndexMap<String, String>;

/// A parsed INI document.
///
/// Sections and keys keep the order in which they first appear. A repeated
/// key keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    sections: IndexMap<String, Section>,
}

impl Ini {
    /// Parse INI content with a filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        let mut current = DEFAULT_SECTION.to_string();
        let mut offset = 0;

        for (index, raw_line) in content.split_inclusive('\n').enumerate() {
            let line_no = index + 1;
            let line_start = offset;
            offset += raw_line.len();

            let mut line = raw_line.trim_end_matches(['\n', '\r']);
            if index == 0 {
                line = line.trim_start_matches('\u{feff}');
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            let span = (line_start + (raw_line.len() - raw_line.trim_start().len()), trimmed.len());

            if let Some(header) = trimmed.strip_prefix('[') {
                let Some(name) = header.strip_suffix(']') else {
                    return Err(ctx.syntax_error(line_no, "unclosed section header", span));
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(ctx.syntax_error(line_no, "empty section name", span));
                }
                current = name.to_string();
                sections.entry(current.clone()).or_default();
                continue;
            }

            let Some(delim) = trimmed.find(['=', ':']) else {
                return Err(ctx.syntax_error(line_no, "key-value delimiter not found", span));
            };
            let key = trimmed[..delim].trim();
            if key.is_empty() {
                return Err(ctx.syntax_error(line_no, "empty key name", span));
            }
            let value = parse_value(&trimmed[delim + 1..]);

            sections
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), value);
        }

        Ok(Self { sections })
    }

    /// Get a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a value from a section.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    /// Remove and return a section, keeping its key order.
    pub fn take_section(&mut self, name: &str) -> Section {
        self.sections.shift_remove(name).unwrap_or_default()
    }
}

/// Unquote a value, or strip an inline comment from an unquoted one.
fn parse_value(raw: &str) -> String {
    let value = raw.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }

    let mut prev_blank = false;
    for (i, c) in value.char_indices() {
        if (c == '#' || c == ';') && prev_blank {
            return value[..i].trim_end().to_string();
        }
        prev_blank = c.is_whitespace();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(content: &str) -> Ini {
        Ini::parse(content, "index.ini").expect("Failed to parse INI")
    }

    #[test]
    fn test_sections_and_order() {
        let ini = parse(
            r#"
[header]
content = "index.md"

[properties]
zeta = 1
alpha = 2
mid = 3
"#,
        );

        assert_eq!(ini.get("header", "content"), Some("index.md"));
        let keys: Vec<&str> = ini
            .section("properties")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert!(ini.section("DEFAULT").is_none());
    }

    #[test]
    fn test_colon_delimiter_and_first_delimiter_wins() {
        let ini = parse("[properties]\ntime: 10:30\nurl = https://example.com/a=b\n");
        assert_eq!(ini.get("properties", "time"), Some("10:30"));
        assert_eq!(ini.get("properties", "url"), Some("https://example.com/a=b"));
    }

    #[test]
    fn test_comments_and_inline_comments() {
        let ini = parse(
            "; leading comment\n# another\n[properties]\nrating = 5 ; out of ten\ntag = c#sharp\nquoted = \"keep ; this\"\n",
        );
        assert_eq!(ini.get("properties", "rating"), Some("5"));
        assert_eq!(ini.get("properties", "tag"), Some("c#sharp"));
        assert_eq!(ini.get("properties", "quoted"), Some("keep ; this"));
    }

    #[test]
    fn test_quotes_stripped() {
        let ini = parse("[header]\na = \"x\"\nb = 'y'\nc = \"unbalanced\nd = \"\"\n");
        assert_eq!(ini.get("header", "a"), Some("x"));
        assert_eq!(ini.get("header", "b"), Some("y"));
        assert_eq!(ini.get("header", "c"), Some("\"unbalanced"));
        assert_eq!(ini.get("header", "d"), Some(""));
    }

    #[test]
    fn test_repeated_key_keeps_position_takes_last_value() {
        let ini = parse("[properties]\na = 1\nb = 2\na = 3\n");
        let section = ini.section("properties").unwrap();
        let pairs: Vec<(&str, &str)> = section
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_keys_before_section_go_to_default() {
        let ini = parse("orphan = yes\n[header]\nschema = book\n");
        assert_eq!(ini.get(DEFAULT_SECTION, "orphan"), Some("yes"));
        assert_eq!(ini.get("header", "schema"), Some("book"));
    }

    #[test]
    fn test_empty_value_and_crlf() {
        let ini = parse("[header]\r\ntemplate =\r\n[properties]\r\nkey1 = value1\r\n");
        assert_eq!(ini.get("header", "template"), Some(""));
        assert_eq!(ini.get("properties", "key1"), Some("value1"));
    }

    #[test]
    fn test_bom_is_ignored() {
        let ini = parse("\u{feff}[header]\nschema = s\n");
        assert_eq!(ini.get("header", "schema"), Some("s"));
    }

    #[test]
    fn test_missing_delimiter_is_error() {
        let err = Ini::parse("[properties]\njust some text\n", "index.ini").unwrap_err();
        match *err {
            Error::Syntax { line, ref message, .. } => {
                assert_eq!(line, 2);
                assert_eq!(message, "key-value delimiter not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_section_is_error() {
        let err = Ini::parse("[header\n", "index.ini").unwrap_err();
        assert!(err.to_string().contains("unclosed section header"));
    }

    #[test]
    fn test_take_section() {
        let mut ini = parse("[properties]\nb = 1\na = 2\n");
        let props = ini.take_section("properties");
        assert_eq!(props.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert!(ini.take_section("properties").is_empty());
    }
}
