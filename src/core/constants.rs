/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colored successful URLs followed by a summary line
    pub const TEXT: &str = "text";
    /// JSON output format - a single report document for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Scheduling mode names accepted on the command line and in config files
pub mod modes {
    /// One probe at a time, in candidate order
    pub const SEQUENTIAL: &str = "sequential";
    /// Up to `concurrency` probes in flight
    pub const BOUNDED_PARALLEL: &str = "bounded-parallel";
    /// Legacy alias for [`SEQUENTIAL`]
    pub const SYNC: &str = "sync";
    /// Legacy alias for [`BOUNDED_PARALLEL`]
    pub const ASYNC: &str = "async";

    /// Default scheduling mode
    pub const DEFAULT: &str = SEQUENTIAL;

    /// All accepted mode names, aliases included
    pub const ALL: [&str; 4] = [SEQUENTIAL, BOUNDED_PARALLEL, SYNC, ASYNC];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status counted as a successful probe
    pub const OK: u16 = 200;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Largest accepted per-request timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86400;
}

/// Default configuration values
pub mod defaults {
    /// Placeholder marker substituted by each candidate
    pub const PLACEHOLDER: &str = "@";
    /// Default upper bound of in-flight probes in bounded-parallel mode
    pub const CONCURRENCY: usize = 100;
    /// Largest accepted concurrency limit
    pub const MAX_CONCURRENCY: usize = 1000;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".afuzz.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Console output strings
pub mod display {
    /// Prefix of the trailing summary line
    pub const SUMMARY_PREFIX: &str = "Successful responses (200)";
    /// Prefix for fatal error messages
    pub const ERROR_PREFIX: &str = "[!]";
    /// Prefix for interactive questions
    pub const QUESTION_PREFIX: &str = "[?]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_modes_constants() {
        assert_eq!(modes::DEFAULT, modes::SEQUENTIAL);
        assert!(modes::ALL.contains(&"sync"));
        assert!(modes::ALL.contains(&"async"));
        assert!(modes::ALL.contains(&"bounded-parallel"));
    }

    #[test]
    fn test_defaults_constants() {
        assert_eq!(defaults::PLACEHOLDER, "@");
        assert!((50..=200).contains(&defaults::CONCURRENCY));
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 10);
    }
}
