use std::fs;
use std::path::Path;

use crate::core::error::{AfuzzError, Result};

/// Candidates read from a wordlist, plus how many blank lines were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wordlist {
    pub candidates: Vec<String>,
    pub skipped_blank: usize,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Split wordlist text into trimmed candidates.
///
/// Lines are trimmed of surrounding whitespace and their terminator. Lines
/// that are empty after trimming are skipped unless `keep_blank_lines` is set,
/// in which case they become empty candidates.
pub fn parse_candidates(content: &str, keep_blank_lines: bool) -> Wordlist {
    let mut wordlist = Wordlist::default();

    for line in content.lines() {
        let candidate = line.trim();
        if candidate.is_empty() && !keep_blank_lines {
            wordlist.skipped_blank += 1;
            continue;
        }
        wordlist.candidates.push(candidate.to_string());
    }

    wordlist
}

/// Fail if `path` is not an existing regular file.
pub fn ensure_wordlist_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(AfuzzError::Wordlist(format!(
            "Wordlist file '{}' not found.",
            path.display()
        )));
    }
    Ok(())
}

/// Read and parse a wordlist file.
///
/// Fails before any request is sent if the file is missing or unreadable.
pub fn load_wordlist<P: AsRef<Path>>(path: P, keep_blank_lines: bool) -> Result<Wordlist> {
    let path = path.as_ref();
    ensure_wordlist_exists(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        AfuzzError::Wordlist(format!(
            "Error reading wordlist '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(parse_candidates(&content, keep_blank_lines))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_parse_candidates__trims_lines() {
        let wordlist = parse_candidates("admin\n  login \r\nsecret\t\n", false);
        assert_eq!(wordlist.candidates, vec!["admin", "login", "secret"]);
        assert_eq!(wordlist.skipped_blank, 0);
    }

    #[test]
    fn test_parse_candidates__skips_blank_lines_by_default() {
        let wordlist = parse_candidates("admin\n\n   \nlogin\n", false);
        assert_eq!(wordlist.candidates, vec!["admin", "login"]);
        assert_eq!(wordlist.skipped_blank, 2);
    }

    #[test]
    fn test_parse_candidates__keeps_blank_lines_when_asked() {
        let wordlist = parse_candidates("admin\n\nlogin", true);
        assert_eq!(wordlist.candidates, vec!["admin", "", "login"]);
        assert_eq!(wordlist.skipped_blank, 0);
        assert_eq!(wordlist.len(), 3);
    }

    #[test]
    fn test_parse_candidates__empty_input() {
        let wordlist = parse_candidates("", false);
        assert!(wordlist.is_empty());
        assert_eq!(wordlist.skipped_blank, 0);
    }

    #[test]
    fn test_load_wordlist__from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"admin\nlogin\n")?;

        let wordlist = load_wordlist(file.path(), false)?;
        assert_eq!(wordlist.candidates, vec!["admin", "login"]);
        Ok(())
    }

    #[test]
    fn test_load_wordlist__when_non_existing_file() {
        let err = load_wordlist("non_existing_wordlist.txt", false).unwrap_err();
        assert!(matches!(err, AfuzzError::Wordlist(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_wordlist__directory_is_not_a_wordlist() -> TestResult {
        let dir = tempfile::tempdir()?;
        assert!(load_wordlist(dir.path(), false).is_err());
        Ok(())
    }
}
