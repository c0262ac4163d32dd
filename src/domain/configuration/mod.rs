pub mod format;
pub mod shape;
pub mod transform;

pub use format::{ConfigFormat, parse_document};
pub use shape::{BranchModuleMap, ConfigShape, DirectoryOptionsConfig, SkippedEntry, classify};
pub use transform::{Derivation, DerivationMode, derive};
