//! Derivation of a [`ResolutionResult`] from a parsed document.

use serde::Serialize;
use serde_yaml::Mapping;

use super::shape::{
    ConfigShape, DEFAULT_KEY, DirectoryOptionsConfig, SkippedEntry, TARGET_DIRECTORY_KEY, classify,
};
use crate::domain::ResolutionResult;

/// Which rule produced the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMode {
    DirectOptions,
    BranchModuleMap,
    /// The document matched no shape; the result is the fallback.
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub result: ResolutionResult,
    pub mode: DerivationMode,
    pub skipped: Vec<SkippedEntry>,
}

/// Derive the directory options and default from a configuration document.
pub fn derive(document: &Mapping) -> Derivation {
    let classified = classify(document);
    let mut skipped = classified.skipped;

    let (result, mode) = match classified.shape {
        ConfigShape::DirectOptions(config) => {
            (from_direct_options(config, &mut skipped), DerivationMode::DirectOptions)
        }
        ConfigShape::BranchModuleMap(map) => (
            ResolutionResult::from_options(map.directory_options()),
            DerivationMode::BranchModuleMap,
        ),
        ConfigShape::Unrecognized(reason) => {
            (ResolutionResult::fallback(), DerivationMode::Unrecognized(reason))
        }
    };

    Derivation { result, mode, skipped }
}

fn from_direct_options(
    config: DirectoryOptionsConfig,
    skipped: &mut Vec<SkippedEntry>,
) -> ResolutionResult {
    let options = config.options.unwrap_or_default();

    match (options.is_empty(), config.default) {
        (false, Some(default)) => {
            let (result, honored) = ResolutionResult::with_default(options, default.clone());
            if !honored {
                skipped.push(SkippedEntry {
                    location: format!("{}.{}", TARGET_DIRECTORY_KEY, DEFAULT_KEY),
                    reason: format!(
                        "'{}' is not one of the options; using '{}'",
                        default,
                        result.default_directory()
                    ),
                });
            }
            result
        }
        (false, None) => ResolutionResult::from_options(options),
        (true, Some(default)) => ResolutionResult::from_options(vec![default]),
        (true, None) => ResolutionResult::fallback(),
    }
}
