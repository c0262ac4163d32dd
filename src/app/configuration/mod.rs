//! Configuration discovery: candidate paths and the locator.

mod locator;
mod settings;

pub use locator::{LocatedConfig, locate};
pub use settings::{DEFAULT_CONFIG_PATHS, GITHUB_WORKSPACE_ENV, ResolverSettings};
