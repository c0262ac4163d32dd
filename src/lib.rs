//! tfdirs: Resolve Terraform directory options from repository configuration
//! and publish them as GitHub Actions outputs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, DirectoryOption, Emitted, PublishReport, ResolutionReport, ResolutionResult,
    ResolverSettings, RunOutcome, publish, resolve, run, run_github,
};
pub use domain::FALLBACK_DIRECTORY;
pub use ports::{OutputSink, RepositoryFilesystem};
