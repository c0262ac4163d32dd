//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together the concrete
//! adapters and command execution.

use crate::adapters::{GitHubOutputSink, LocalFilesystem};
use crate::app::commands;
use crate::ports::OutputSink;

pub use crate::app::commands::{Emitted, PublishReport, ResolutionReport, RunOutcome};
pub use crate::app::configuration::ResolverSettings;
pub use crate::domain::{AppError, DirectoryOption, ResolutionResult};

/// Locate and transform configuration from the local filesystem.
pub fn resolve(settings: &ResolverSettings) -> ResolutionReport {
    commands::resolve::execute(&LocalFilesystem::new(), settings)
}

/// Publish a resolution result through any output sink.
pub fn publish(result: &ResolutionResult, sink: &mut impl OutputSink) -> PublishReport {
    commands::publish(result, sink)
}

/// Full run against the local filesystem, publishing through `sink`.
pub fn run(settings: &ResolverSettings, sink: &mut impl OutputSink) -> RunOutcome {
    commands::run(&LocalFilesystem::new(), settings, sink)
}

/// Full run publishing through GitHub Actions outputs (`GITHUB_OUTPUT` + stdout).
pub fn run_github(settings: &ResolverSettings) -> RunOutcome {
    let mut sink = GitHubOutputSink::from_env();
    run(settings, &mut sink)
}
