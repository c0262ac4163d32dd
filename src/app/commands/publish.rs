//! Publish a `ResolutionResult` through the pipeline's output channel.
//!
//! `directory_options` is written as compact single-line JSON and
//! `default_directory` as a plain string. Publishing never propagates an
//! error: on failure the fallback values are attempted and the run is
//! reported as failed through the sink.

use serde::Serialize;
use tracing::{error, info};

use crate::domain::{AppError, ResolutionResult};
use crate::ports::OutputSink;

pub const DIRECTORY_OPTIONS_OUTPUT: &str = "directory_options";
pub const DEFAULT_DIRECTORY_OUTPUT: &str = "default_directory";

/// Which values reached the output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emitted {
    Resolved,
    Fallback,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub emitted: Emitted,
    /// The sink was told the run failed.
    pub failed: bool,
}

/// Publish `result`, falling back to the fallback outputs on any emission error.
pub fn publish(result: &ResolutionResult, sink: &mut impl OutputSink) -> PublishReport {
    let err = match emit(result, sink) {
        Ok(()) => return PublishReport { emitted: Emitted::Resolved, failed: false },
        Err(err) => err,
    };

    error!(error = %err, "Failed to publish directory options; emitting fallback");

    let emitted = match emit(&ResolutionResult::fallback(), sink) {
        Ok(()) => Emitted::Fallback,
        Err(fallback_err) => {
            error!(error = %fallback_err, "Failed to publish fallback directory options");
            Emitted::Nothing
        }
    };

    sink.report_failure(&err.to_string());
    PublishReport { emitted, failed: true }
}

fn emit(result: &ResolutionResult, sink: &mut impl OutputSink) -> Result<(), AppError> {
    // Compact single-line JSON (no pretty printing)
    let options_json = serde_json::to_string(result.directory_options())
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    sink.set_outputs(&[
        (DIRECTORY_OPTIONS_OUTPUT, options_json.as_str()),
        (DEFAULT_DIRECTORY_OUTPUT, result.default_directory().as_str()),
    ])?;

    info!("Directory options: {}", options_json);
    info!("Default directory: {}", result.default_directory());
    Ok(())
}
