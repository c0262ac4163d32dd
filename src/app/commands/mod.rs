pub mod publish;
pub mod resolve;

use serde::Serialize;

use crate::app::configuration::ResolverSettings;
use crate::ports::{OutputSink, RepositoryFilesystem};

pub use publish::{
    DEFAULT_DIRECTORY_OUTPUT, DIRECTORY_OPTIONS_OUTPUT, Emitted, PublishReport, publish,
};
pub use resolve::ResolutionReport;

/// Result of a full locate → transform → publish run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub resolution: ResolutionReport,
    pub publish: PublishReport,
}

impl RunOutcome {
    /// Process exit code: non-zero only when the run was reported as failed.
    pub fn exit_code(&self) -> i32 {
        if self.publish.failed { 1 } else { 0 }
    }
}

/// Resolve directory options and publish them through `sink`.
pub fn run(
    fs: &impl RepositoryFilesystem,
    settings: &ResolverSettings,
    sink: &mut impl OutputSink,
) -> RunOutcome {
    let resolution = resolve::execute(fs, settings);
    let publish = publish::publish(&resolution.result, sink);
    RunOutcome { resolution, publish }
}
