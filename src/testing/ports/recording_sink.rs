//! Test double for `OutputSink`.

use crate::domain::AppError;
use crate::ports::OutputSink;

/// Records outputs and failure reports in memory.
///
/// `failing_on` and `broken` make `set_output` reject writes, which drives
/// the publisher's fallback path.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub outputs: Vec<(String, String)>,
    pub failures: Vec<String>,
    fail_values: Vec<String>,
    fail_all: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any write whose value equals `value`.
    pub fn failing_on(value: &str) -> Self {
        Self { fail_values: vec![value.to_string()], ..Self::default() }
    }

    /// Reject every write.
    pub fn broken() -> Self {
        Self { fail_all: true, ..Self::default() }
    }

    /// Last value written for `name`.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

impl OutputSink for RecordingSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        if self.fail_all || self.fail_values.iter().any(|v| v == value) {
            return Err(AppError::emission(name, "rejected by recording sink"));
        }
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn report_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
