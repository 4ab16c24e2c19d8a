// crates/uspd-dlms/src/ini.rs

//! A minimal scanner for the INI dialect used by USPD configuration files.
//!
//! Only what the loader needs is supported: `[section]` headers, `key = value`
//! pairs and full-line comments starting with `;` (or `#`). Section and key
//! comparisons are ASCII case-insensitive, values are kept verbatim (trimmed).

use crate::error::LoadError;

/// A single `[section]` block, with its entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
    pub name: String,
    /// 1-based line number of the section header.
    pub line: usize,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: String, line: usize) -> Self {
        Self {
            name,
            line,
            entries: Vec::new(),
        }
    }

    /// Looks up a key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    fn insert(&mut self, key: String, value: String, line: usize) -> Result<(), LoadError> {
        if self.get(&key).is_some() {
            return Err(LoadError::DuplicateKey {
                line,
                section: self.name.clone(),
                key,
            });
        }
        self.entries.push((key, value));
        Ok(())
    }
}

/// A scanned INI document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct IniDocument {
    /// Entries that appear before the first section header.
    pub globals: Vec<(String, String)>,
    pub sections: Vec<Section>,
}

/// Scans INI text into sections.
///
/// # Errors
/// Returns `LoadError::Syntax` for lines that are not a header, a pair or a
/// comment, and `DuplicateSection` / `DuplicateKey` for repeated names.
pub(crate) fn parse(text: &str) -> Result<IniDocument, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut doc = IniDocument::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            // Anything after the closing bracket is ignored.
            let (name, _) = rest.split_once(']').ok_or_else(|| syntax(line_no, line))?;
            let name = name.trim();

            if doc
                .sections
                .iter()
                .any(|s| s.name.eq_ignore_ascii_case(name))
            {
                return Err(LoadError::DuplicateSection {
                    line: line_no,
                    name: name.to_string(),
                });
            }
            doc.sections.push(Section::new(name.to_string(), line_no));
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| syntax(line_no, line))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(syntax(line_no, line));
        }
        let value = value.trim().to_string();

        match doc.sections.last_mut() {
            Some(section) => section.insert(key.to_string(), value, line_no)?,
            None => doc.globals.push((key.to_string(), value)),
        }
    }

    Ok(doc)
}

fn syntax(line: usize, content: &str) -> LoadError {
    LoadError::Syntax {
        line,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_file_order() {
        let doc = parse("[B]\nx=1\n[A]\ny=2\n[C]\n").unwrap();
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
        assert_eq!(doc.sections[2].line, 5);
    }

    #[test]
    fn test_keys_and_values_are_trimmed_and_case_insensitive() {
        let doc = parse("[Channel]\n  DlmsName =  3,1.0.1.8.0.255  \nMODULE=1").unwrap();
        let section = &doc.sections[0];
        assert_eq!(section.get("dlmsname"), Some("3,1.0.1.8.0.255"));
        assert_eq!(section.get("Module"), Some("1"));
        assert_eq!(section.get("TYPE"), None);
    }

    #[test]
    fn test_value_splits_on_first_equals_only() {
        let doc = parse("[S]\nexpr = a=b").unwrap();
        assert_eq!(doc.sections[0].get("expr"), Some("a=b"));
    }

    #[test]
    fn test_comments_blank_lines_and_bom_are_skipped() {
        let doc = parse("\u{feff}; header\n\n# note\n[S]\n;k=v\nk = v\n").unwrap();
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].get("k"), Some("v"));
    }

    #[test]
    fn test_entries_before_first_section_are_globals() {
        let doc = parse("version=2\n[S]\n").unwrap();
        assert_eq!(doc.globals, vec![("version".to_string(), "2".to_string())]);
        assert!(doc.sections[0].get("version").is_none());
    }

    #[test]
    fn test_line_without_equals_is_syntax_error() {
        let err = parse("[S]\njust text\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_text_after_header_is_ignored() {
        let doc = parse("[Module1] ; main meter\nTYPE=DM\n[ Channel A ]]\nMODULE=1\n").unwrap();
        assert_eq!(doc.sections[0].name, "Module1");
        assert_eq!(doc.sections[0].get("TYPE"), Some("DM"));
        assert_eq!(doc.sections[1].name, "Channel A");
    }

    #[test]
    fn test_unterminated_header_is_syntax_error() {
        let err = parse("[Module1\nTYPE=DM\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_empty_key_is_syntax_error() {
        let err = parse("[S]\n = value\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_section_ignores_case() {
        let err = parse("[Energy]\n[ENERGY]\n").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateSection { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_key_ignores_case() {
        let err = parse("[S]\nModule=1\nMODULE=2\n").unwrap_err();
        match err {
            LoadError::DuplicateKey { line, section, key } => {
                assert_eq!(line, 3);
                assert_eq!(section, "S");
                assert_eq!(key, "MODULE");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
