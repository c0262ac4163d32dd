//! Pipeline output channel.

use crate::domain::AppError;

/// Named outputs and failure reporting of the invoking pipeline.
///
/// Implementations must not panic; every problem is returned as an error.
pub trait OutputSink {
    /// Publish `value` under `name`.
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), AppError>;

    /// Publish several outputs as one unit.
    ///
    /// The default publishes them one by one. Sinks that can validate
    /// up front should write nothing when any output is rejected.
    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<(), AppError> {
        for (name, value) in outputs {
            self.set_output(name, value)?;
        }
        Ok(())
    }

    /// Mark the current run as failed with a message.
    fn report_failure(&mut self, message: &str);
}
