use afuzz::config::{CliConfig, Config};
use afuzz::core::constants::{display, output_formats};
use afuzz::fuzz::{DispatchOptions, Dispatcher, HttpExecutor, ResultSink, Template, run_session};
use afuzz::input::{ensure_wordlist_exists, load_wordlist, validate_base_url};
use afuzz::reporting::logging;
use afuzz::ui::color::{Colors, colorize};
use afuzz::ui::{
    Cli, ConsoleFormat, ConsoleSink, FileSink, ProgressReporter, cli_to_config, confirm_overwrite,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_afuzz_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {e}", colorize(display::ERROR_PREFIX, Colors::RED));
            std::process::exit(1);
        }
    }
}

/// Main fuzzing logic extracted from main() for testing
pub async fn run_afuzz_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    // Everything below must succeed before the first request is sent
    validate_base_url(&cli.url, config.placeholder())?;
    let template = Template::new(cli.url.as_str(), config.placeholder())?;
    ensure_wordlist_exists(&cli.wordlist)?;

    let may_write = confirm_overwrite(&cli.output, cli_config.force).unwrap_or_else(|e| {
        logging::log_error("Could not ask for confirmation", Some(&e));
        false
    });
    if !may_write {
        eprintln!(
            "{} Operation aborted.",
            colorize(display::ERROR_PREFIX, Colors::RED)
        );
        return Ok(1);
    }

    let wordlist = load_wordlist(&cli.wordlist, config.keep_blank_lines())?;
    logging::log_wordlist_info(&cli.wordlist, wordlist.len(), wordlist.skipped_blank);

    let executor = HttpExecutor::from_config(&config)?;
    let dispatcher = Dispatcher::new(executor, DispatchOptions::from_config(&config));

    let mut file = FileSink::create(&cli.output).inspect_err(|e| {
        logging::log_error(&format!("Could not open output file '{}'", cli.output), Some(e));
    })?;
    let mut progress = ProgressReporter::new(output_settings.show_progress);
    progress.start_probing(wordlist.len());
    let mut console = ConsoleSink::stdout(ConsoleFormat::from_name(&output_settings.output_format))
        .with_progress(progress.bar());

    let sinks: &mut [&mut dyn ResultSink] = &mut [&mut progress, &mut console, &mut file];
    run_session(&dispatcher, &template, &wordlist.candidates, sinks).await?;

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config.output_format().to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format != output_formats::JSON;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_setup_output_settings_defaults() {
        let settings = setup_output_settings(&CliConfig::default(), &Config::default());
        assert!(!settings.quiet);
        assert!(!settings.verbose);
        assert_eq!(settings.output_format, output_formats::TEXT);
        assert!(settings.show_progress);
    }

    #[test]
    fn test_setup_output_settings_hides_progress() {
        let quiet = CliConfig {
            quiet: true,
            ..Default::default()
        };
        assert!(!setup_output_settings(&quiet, &Config::default()).show_progress);

        let json = Config {
            output_format: Some(output_formats::JSON.to_string()),
            ..Default::default()
        };
        assert!(!setup_output_settings(&CliConfig::default(), &json).show_progress);
    }

    #[test]
    fn test_load_and_merge_config_no_config() {
        let cli_config = CliConfig {
            no_config: true,
            timeout: Some(4),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.timeout, Some(4));
    }

    #[test]
    fn test_load_and_merge_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"concurrency = 9\nmode = \"async\"").unwrap();

        let cli_config = CliConfig {
            config_file: Some(file.path().display().to_string()),
            concurrency: Some(3),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.concurrency_limit(), 3);
        assert_eq!(config.mode(), afuzz::Mode::BoundedParallel);
    }

    #[test]
    fn test_load_and_merge_config_rejects_invalid_cli_values() {
        let cli_config = CliConfig {
            no_config: true,
            concurrency: Some(0),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }
}
