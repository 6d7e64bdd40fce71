use crate::config::Config;
use crate::core::types::{Outcome, Report};
use crate::fuzz::dispatcher::DispatchOptions;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let mode = config.mode();
    let concurrency = config.concurrency_limit();
    let placeholder = config.placeholder();
    let keep_blank_lines = config.keep_blank_lines();

    info!("Configuration: mode={mode}, concurrency={concurrency}, timeout={timeout}s");
    info!("Input: placeholder='{placeholder}', keep_blank_lines={keep_blank_lines}");
    if let Some(ref user_agent) = config.user_agent {
        info!("HTTP: user_agent='{user_agent}'");
    }
}

/// Log wordlist loading information
pub fn log_wordlist_info<P: AsRef<Path>>(path: P, candidates: usize, skipped_blank: usize) {
    info!(
        "Loaded {candidates} candidate(s) from {}",
        path.as_ref().display()
    );
    if skipped_blank > 0 {
        debug!("Skipped {skipped_blank} blank line(s)");
    }
}

/// Log dispatch start
pub fn log_dispatch_start(candidate_count: usize, options: &DispatchOptions) {
    info!(
        "Dispatching {candidate_count} probe(s): mode={}, in-flight limit={}, timeout={}s",
        options.mode,
        options.effective_concurrency(),
        options.timeout.as_secs()
    );
}

/// Log individual probe outcomes for debugging
pub fn log_probe_outcome(index: usize, outcome: &Outcome) {
    match outcome {
        Outcome::Success { url, status } if outcome.is_success() => {
            debug!("✓ #{index} {url} -> {status}")
        }
        Outcome::Success { url, status } => debug!("✗ #{index} {url} -> {status}"),
        Outcome::Failure {
            url,
            kind,
            description,
        } => debug!("✗ #{index} {url} -> {kind} ({description})"),
    }
}

/// Log dispatch completion
pub fn log_dispatch_complete(report: &Report, duration_ms: u128) {
    if report.is_empty() {
        warn!(
            "Run complete: no successful responses out of {} probe(s) ({}ms)",
            report.attempted(),
            duration_ms
        );
    } else {
        info!(
            "Run complete: {}/{} probe(s) returned 200 ({}ms)",
            report.count(),
            report.attempted(),
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
