//! GitHub Actions output sink.
//!
//! Writes `name=value` lines to stdout, and appends the same lines to the
//! file named by `GITHUB_OUTPUT` when set.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::OutputSink;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// `OutputSink` backed by the GitHub Actions runner conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitHubOutputSink {
    output_file: Option<PathBuf>,
}

impl GitHubOutputSink {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Build from the `GITHUB_OUTPUT` environment variable.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(output_file)
    }

    /// Write already validated lines; `name` labels any I/O error.
    fn write_lines(&self, name: &str, lines: &str) -> Result<(), AppError> {
        if let Some(path) = &self.output_file {
            let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
                AppError::emission(name, format!("failed to open {}: {}", GITHUB_OUTPUT_ENV, e))
            })?;
            file.write_all(lines.as_bytes()).map_err(|e| {
                AppError::emission(name, format!("failed to write {}: {}", GITHUB_OUTPUT_ENV, e))
            })?;
        }

        io::stdout().lock().write_all(lines.as_bytes()).map_err(|e| AppError::emission(name, e))
    }
}

impl OutputSink for GitHubOutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        self.set_outputs(&[(name, value)])
    }

    /// Validates every output before writing any of them.
    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<(), AppError> {
        let Some((first_name, _)) = outputs.first() else {
            return Ok(());
        };

        let mut lines = String::new();
        for (name, value) in outputs {
            output_line(name, value, &mut lines)?;
        }
        self.write_lines(first_name, &lines)
    }

    fn report_failure(&mut self, message: &str) {
        let _ = writeln!(io::stdout().lock(), "::error::{}", escape_command_data(message));
    }
}

/// Append `name=value\n`. The output file format is line-oriented.
fn output_line(name: &str, value: &str, lines: &mut String) -> Result<(), AppError> {
    if name.is_empty() || name.contains(['\n', '\r', '=']) {
        return Err(AppError::emission(name, "output name must be a single token"));
    }
    if value.contains(['\n', '\r']) {
        return Err(AppError::emission(name, "output value must be single-line"));
    }

    lines.push_str(name);
    lines.push('=');
    lines.push_str(value);
    lines.push('\n');
    Ok(())
}

/// Escape data for a workflow command (`%`, CR and LF).
fn escape_command_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
