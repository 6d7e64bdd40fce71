use std::fmt;

/// Error types for afuzz operations.
///
/// Only errors that abort a whole run live here. A single failed probe is
/// never an `AfuzzError`, it is recorded as [`crate::Outcome::Failure`].
#[derive(Debug)]
pub enum AfuzzError {
    /// IO error (output file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Template does not contain the placeholder marker
    Template(String),

    /// Base URL is not a well-formed absolute URL
    InvalidUrl(String),

    /// Wordlist is missing or could not be read
    Wordlist(String),

    /// Aggregation invariant violated (missing, duplicate or out-of-range index)
    Aggregation(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Interactive prompt error
    Prompt(dialoguer::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for AfuzzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfuzzError::Io(err) => write!(f, "IO error: {err}"),
            AfuzzError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AfuzzError::Template(msg) => write!(f, "Template error: {msg}"),
            AfuzzError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            AfuzzError::Wordlist(msg) => write!(f, "Wordlist error: {msg}"),
            AfuzzError::Aggregation(msg) => write!(f, "Aggregation error: {msg}"),
            AfuzzError::Http(err) => write!(f, "HTTP error: {err}"),
            AfuzzError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            AfuzzError::Prompt(err) => write!(f, "Prompt error: {err}"),
            AfuzzError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for AfuzzError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AfuzzError::Io(err) => Some(err),
            AfuzzError::Http(err) => Some(err),
            AfuzzError::TomlParsing(err) => Some(err),
            AfuzzError::Prompt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AfuzzError {
    fn from(err: std::io::Error) -> Self {
        AfuzzError::Io(err)
    }
}

impl From<reqwest::Error> for AfuzzError {
    fn from(err: reqwest::Error) -> Self {
        AfuzzError::Http(err)
    }
}

impl From<toml::de::Error> for AfuzzError {
    fn from(err: toml::de::Error) -> Self {
        AfuzzError::TomlParsing(err)
    }
}

impl From<dialoguer::Error> for AfuzzError {
    fn from(err: dialoguer::Error) -> Self {
        AfuzzError::Prompt(err)
    }
}

/// Type alias for Results using AfuzzError
pub type Result<T> = std::result::Result<T, AfuzzError>;
