//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, console and file output, progress reporting
//! and the overwrite prompt.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{ConsoleFormat, ConsoleSink, FileSink};
pub use progress::ProgressReporter;
pub use prompt::confirm_overwrite;
