// Command-line interface definitions and parsing for afuzz

use crate::config::CliConfig;
use crate::core::constants::{modes, output_formats};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// Base URL with the placeholder (default '@') where candidates are substituted
    #[arg(short = 'u', long, value_name = "URL", help_heading = "Core Options")]
    pub url: String,

    /// Path to the wordlist file, one candidate per line
    #[arg(short = 'w', long, value_name = "FILE", help_heading = "Core Options")]
    pub wordlist: String,

    /// Output file for successful URLs
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Core Options")]
    pub output: String,

    /// Scheduling mode (default: sequential)
    #[arg(
        short = 'm',
        long,
        value_name = "MODE",
        value_parser = modes::ALL,
        help_heading = "Core Options"
    )]
    pub mode: Option<String>,

    /// Maximum requests in flight in bounded-parallel mode (default: 100)
    #[arg(short = 'c', long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    // Input & Output
    /// Placeholder marker in the base URL (default: @)
    #[arg(long, value_name = "MARKER", help_heading = "Input & Output")]
    pub placeholder: Option<String>,

    /// Keep blank wordlist lines as empty candidates
    #[arg(long, help_heading = "Input & Output")]
    pub keep_blank_lines: bool,

    /// Overwrite the output file without asking
    #[arg(short = 'f', long, help_heading = "Input & Output")]
    pub force: bool,

    /// Output format
    #[arg(
        long,
        value_name = "FORMAT",
        value_parser = output_formats::ALL,
        help_heading = "Input & Output"
    )]
    pub format: Option<String>,

    // Output & Verbosity
    /// Suppress progress output and logs
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging, including failed probes
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        mode: cli.mode.clone(),
        concurrency: cli.concurrency,
        placeholder: cli.placeholder.clone(),
        keep_blank_lines: cli.keep_blank_lines,
        force: cli.force,
        output_format: cli.format.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        user_agent: cli.user_agent.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(
            ["afuzz", "-u", "https://example.com/@", "-w", "words.txt", "-o", "out.txt"]
                .iter()
                .chain(args.iter()),
        )
    }

    #[test]
    fn test_cli__definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli__required_arguments() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.url, "https://example.com/@");
        assert_eq!(cli.wordlist, "words.txt");
        assert_eq!(cli.output, "out.txt");
        assert_eq!(cli.mode, None);
        assert!(!cli.force);

        assert!(Cli::try_parse_from(["afuzz", "-u", "https://example.com/@"]).is_err());
    }

    #[test]
    fn test_cli__mode_values() {
        for mode in ["sequential", "bounded-parallel", "sync", "async"] {
            let cli = parse(&["-m", mode]).unwrap();
            assert_eq!(cli.mode.as_deref(), Some(mode));
        }
        assert!(parse(&["-m", "turbo"]).is_err());
    }

    #[test]
    fn test_cli__format_values() {
        assert!(parse(&["--format", "json"]).is_ok());
        assert!(parse(&["--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_to_config() {
        let cli = parse(&[
            "-m",
            "async",
            "-c",
            "20",
            "-t",
            "3",
            "--placeholder",
            "FUZZ",
            "--keep-blank-lines",
            "-f",
            "-v",
            "--no-progress",
            "--user-agent",
            "agent/1.0",
            "--no-config",
        ])
        .unwrap();

        let cli_config = cli_to_config(&cli);
        assert_eq!(cli_config.mode.as_deref(), Some("async"));
        assert_eq!(cli_config.concurrency, Some(20));
        assert_eq!(cli_config.timeout, Some(3));
        assert_eq!(cli_config.placeholder.as_deref(), Some("FUZZ"));
        assert!(cli_config.keep_blank_lines);
        assert!(cli_config.force);
        assert!(cli_config.verbose);
        assert!(cli_config.no_progress);
        assert_eq!(cli_config.user_agent.as_deref(), Some("agent/1.0"));
        assert!(cli_config.no_config);
        assert!(!cli_config.quiet);
    }
}
