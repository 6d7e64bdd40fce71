use std::fmt;

use crate::core::constants::defaults;
use crate::core::error::{AfuzzError, Result};

/// Replace every occurrence of `marker` in `template` with `candidate`.
///
/// The result is not checked for well-formedness; a malformed URL shows up
/// later as a failed probe.
///
/// # Examples
/// ```
/// use afuzz::fuzz::url_builder::build;
///
/// assert_eq!(build("https://example.com/@", "@", "admin"), "https://example.com/admin");
/// assert_eq!(build("https://@.example.com/@", "@", "x"), "https://x.example.com/x");
/// ```
pub fn build(template: &str, marker: &str, candidate: &str) -> String {
    template.replace(marker, candidate)
}

/// A URL template that is known to contain its placeholder marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    marker: String,
}

impl Template {
    /// Create a template, failing if `raw` does not contain `marker`.
    pub fn new(raw: impl Into<String>, marker: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let marker = marker.into();

        if marker.is_empty() {
            return Err(AfuzzError::Template(
                "Placeholder marker cannot be empty".to_string(),
            ));
        }
        if !raw.contains(&marker) {
            return Err(AfuzzError::Template(format!(
                "Base URL '{raw}' must contain a placeholder '{marker}'"
            )));
        }

        Ok(Self { raw, marker })
    }

    /// Create a template using the default `@` marker.
    pub fn with_default_marker(raw: impl Into<String>) -> Result<Self> {
        Self::new(raw, defaults::PLACEHOLDER)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Number of marker occurrences substituted per candidate.
    pub fn occurrences(&self) -> usize {
        self.raw.matches(&self.marker).count()
    }

    pub fn build(&self, candidate: &str) -> String {
        build(&self.raw, &self.marker, candidate)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_build__single_marker() {
        assert_eq!(
            build("https://example.com/@", "@", "admin"),
            "https://example.com/admin"
        );
    }

    #[test]
    fn test_build__every_marker_is_replaced() {
        let url = build("https://@.example.com/@/@.php", "@", "api");
        assert_eq!(url, "https://api.example.com/api/api.php");
        assert!(!url.contains('@'));
    }

    #[test]
    fn test_build__empty_candidate_removes_marker() {
        assert_eq!(build("https://example.com/@", "@", ""), "https://example.com/");
    }

    #[test]
    fn test_build__multi_character_marker() {
        assert_eq!(
            build("https://example.com/FUZZ?q=FUZZ", "FUZZ", "login"),
            "https://example.com/login?q=login"
        );
    }

    #[test]
    fn test_build__is_deterministic() {
        let first = build("https://example.com/@", "@", "secret");
        let second = build("https://example.com/@", "@", "secret");
        assert_eq!(first, second);
    }

    #[test]
    fn test_template__new_without_marker_fails() {
        let err = Template::new("https://example.com/", "@").unwrap_err();
        assert!(matches!(err, AfuzzError::Template(_)));
        assert!(err.to_string().contains("placeholder '@'"));
    }

    #[test]
    fn test_template__new_with_empty_marker_fails() {
        let err = Template::new("https://example.com/@", "").unwrap_err();
        assert!(matches!(err, AfuzzError::Template(_)));
    }

    #[test]
    fn test_template__build_and_accessors() {
        let template = Template::with_default_marker("https://@.example.com/@").unwrap();
        assert_eq!(template.marker(), "@");
        assert_eq!(template.raw(), "https://@.example.com/@");
        assert_eq!(template.occurrences(), 2);
        assert_eq!(template.build("dev"), "https://dev.example.com/dev");
        assert_eq!(template.to_string(), "https://@.example.com/@");
    }
}
