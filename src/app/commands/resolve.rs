//! Locate and transform: configuration file to `ResolutionResult`.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::app::configuration::{ResolverSettings, locate};
use crate::domain::configuration::{DerivationMode, SkippedEntry, derive};
use crate::domain::{AppError, ResolutionResult};
use crate::ports::RepositoryFilesystem;

/// Resolution outcome with provenance, as printed by `tfdirs inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Config file used; `None` when no candidate was usable.
    pub source: Option<PathBuf>,
    /// `None` when no candidate was usable.
    pub mode: Option<DerivationMode>,
    #[serde(flatten)]
    pub result: ResolutionResult,
    pub skipped: Vec<SkippedEntry>,
}

impl ResolutionReport {
    fn not_found() -> Self {
        Self { source: None, mode: None, result: ResolutionResult::fallback(), skipped: Vec::new() }
    }
}

/// Resolve directory options. Never fails: every problem ends in the fallback result.
pub fn execute(fs: &impl RepositoryFilesystem, settings: &ResolverSettings) -> ResolutionReport {
    let candidates = settings.candidate_paths();

    let located = match locate(fs, &candidates) {
        Ok(located) => located,
        Err(err) => {
            warn!(error = %err, "Using fallback directory options");
            return ResolutionReport::not_found();
        }
    };

    let derivation = derive(&located.document);

    for entry in &derivation.skipped {
        warn!(location = %entry.location, reason = %entry.reason, "Skipping configuration entry");
    }
    if let DerivationMode::Unrecognized(reason) = &derivation.mode {
        let err = AppError::ConfigShape(reason.clone());
        warn!(path = %located.path.display(), error = %err, "Using fallback directory options");
    }
    info!(
        count = derivation.result.directory_options().len(),
        default = %derivation.result.default_directory(),
        "Derived directory options"
    );

    ResolutionReport {
        source: Some(located.path),
        mode: Some(derivation.mode),
        result: derivation.result,
        skipped: derivation.skipped,
    }
}
