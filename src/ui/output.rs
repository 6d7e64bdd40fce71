//! Output writers for successful URLs

use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::Report;
use crate::fuzz::session::ResultSink;
use crate::ui::color::{Colors, paint, supports_formatting};

/// How the console writer renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// Colored URLs as they are found, then a summary line
    Text,
    /// Plain URLs as they are found, then a summary line
    Minimal,
    /// Nothing while running, one JSON report at the end
    Json,
}

impl ConsoleFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            output_formats::JSON => ConsoleFormat::Json,
            output_formats::MINIMAL => ConsoleFormat::Minimal,
            _ => ConsoleFormat::Text,
        }
    }
}

/// Format the trailing summary line.
pub fn summary_line(count: usize) -> String {
    format!("{}: {count}", display::SUMMARY_PREFIX)
}

/// Writes successful URLs to a terminal-like stream.
///
/// When a progress bar is attached, lines are written with the bar suspended
/// so a redraw never lands on top of a result.
pub struct ConsoleSink<W: Write> {
    out: W,
    format: ConsoleFormat,
    color: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: ConsoleFormat) -> Self {
        let color = format == ConsoleFormat::Text && supports_formatting();
        Self::new(io::stdout(), format, color)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: ConsoleFormat, color: bool) -> Self {
        Self {
            out,
            format,
            color,
            progress: None,
        }
    }

    /// Coordinate writes with a live progress bar.
    pub fn with_progress(mut self, progress: Option<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn success(&mut self, url: &str) -> Result<()> {
        if self.format == ConsoleFormat::Json {
            return Ok(());
        }

        let line = paint(url, Colors::GREEN, self.color);
        match self.progress {
            Some(ref pb) if !pb.is_finished() => {
                let out = &mut self.out;
                pb.suspend(|| writeln!(out, "{line}"))?;
            }
            _ => writeln!(self.out, "{line}")?,
        }
        Ok(())
    }

    fn finish(&mut self, report: &Report) -> Result<()> {
        match self.format {
            ConsoleFormat::Json => {
                serde_json::to_writer(&mut self.out, report).map_err(io::Error::from)?;
                writeln!(self.out)?;
            }
            ConsoleFormat::Text | ConsoleFormat::Minimal => {
                writeln!(self.out, "\n{}", summary_line(report.count()))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Persists successful URLs to a file, one per line.
///
/// The file is created (or truncated) once, written as results arrive, and
/// flushed when the run finishes. It is closed when the sink is dropped.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileSink {
    fn success(&mut self, url: &str) -> Result<()> {
        writeln!(self.writer, "{url}")?;
        Ok(())
    }

    fn finish(&mut self, _report: &Report) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn report() -> Report {
        Report::new(
            vec![
                "https://example.com/admin".to_string(),
                "https://example.com/login".to_string(),
            ],
            3,
        )
    }

    fn written(sink: ConsoleSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_console_format__from_name() {
        assert_eq!(ConsoleFormat::from_name("json"), ConsoleFormat::Json);
        assert_eq!(ConsoleFormat::from_name("minimal"), ConsoleFormat::Minimal);
        assert_eq!(ConsoleFormat::from_name("text"), ConsoleFormat::Text);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(2), "Successful responses (200): 2");
    }

    #[test]
    fn test_console_sink__text_without_color() -> TestResult {
        let mut sink = ConsoleSink::new(Vec::new(), ConsoleFormat::Text, false);
        let report = report();
        for url in report.urls() {
            sink.success(url)?;
        }
        sink.finish(&report)?;

        assert_eq!(
            written(sink),
            "https://example.com/admin\nhttps://example.com/login\n\nSuccessful responses (200): 2\n"
        );
        Ok(())
    }

    #[test]
    fn test_console_sink__text_with_color() -> TestResult {
        let mut sink = ConsoleSink::new(Vec::new(), ConsoleFormat::Text, true);
        sink.success("https://example.com/admin")?;

        assert_eq!(written(sink), "\x1b[32mhttps://example.com/admin\x1b[0m\n");
        Ok(())
    }

    #[test]
    fn test_console_sink__writes_around_progress_bar() -> TestResult {
        let pb = ProgressBar::hidden();
        pb.set_length(2);
        let mut sink = ConsoleSink::new(Vec::new(), ConsoleFormat::Text, false)
            .with_progress(Some(pb.clone()));

        sink.success("https://example.com/admin")?;
        pb.finish_and_clear();
        sink.success("https://example.com/login")?;

        assert_eq!(
            written(sink),
            "https://example.com/admin\nhttps://example.com/login\n"
        );
        Ok(())
    }

    #[test]
    fn test_console_sink__json() -> TestResult {
        let mut sink = ConsoleSink::new(Vec::new(), ConsoleFormat::Json, false);
        let report = report();
        for url in report.urls() {
            sink.success(url)?;
        }
        sink.finish(&report)?;

        let value: serde_json::Value = serde_json::from_str(&written(sink))?;
        assert_eq!(value["count"], 2);
        assert_eq!(value["attempted"], 3);
        assert_eq!(value["urls"][1], "https://example.com/login");
        Ok(())
    }

    #[test]
    fn test_console_sink__empty_report() -> TestResult {
        let mut sink = ConsoleSink::new(Vec::new(), ConsoleFormat::Minimal, false);
        sink.finish(&Report::default())?;

        assert_eq!(written(sink), "\nSuccessful responses (200): 0\n");
        Ok(())
    }

    #[test]
    fn test_file_sink__writes_one_url_per_line() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results.txt");

        let mut sink = FileSink::create(&path)?;
        assert_eq!(sink.path(), path.as_path());
        let report = report();
        for url in report.urls() {
            sink.success(url)?;
        }
        sink.finish(&report)?;
        drop(sink);

        assert_eq!(
            std::fs::read_to_string(&path)?,
            "https://example.com/admin\nhttps://example.com/login\n"
        );
        Ok(())
    }

    #[test]
    fn test_file_sink__truncates_existing_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"stale content\n")?;

        let mut sink = FileSink::create(file.path())?;
        sink.finish(&Report::default())?;
        drop(sink);

        assert_eq!(std::fs::read_to_string(file.path())?, "");
        Ok(())
    }

    #[test]
    fn test_file_sink__unwritable_path_fails() {
        assert!(FileSink::create("/definitely/not/a/dir/results.txt").is_err());
    }
}
