pub mod configuration;
pub mod directory_option;
pub mod error;
pub mod resolution;

pub use configuration::{
    BranchModuleMap, ConfigFormat, ConfigShape, Derivation, DerivationMode,
    DirectoryOptionsConfig, SkippedEntry,
};
pub use directory_option::{DirectoryOption, FALLBACK_DIRECTORY, TERRAFORM_PREFIX};
pub use error::AppError;
pub use resolution::ResolutionResult;
