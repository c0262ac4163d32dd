use serde::Serialize;

use super::directory_option::DirectoryOption;

/// Outcome of a resolution run: the selectable options and the default.
///
/// Construct through [`ResolutionResult::from_options`] or
/// [`ResolutionResult::with_default`] so that `default_directory` is always
/// an element of `directory_options` (or the fallback when empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    directory_options: Vec<DirectoryOption>,
    default_directory: DirectoryOption,
}

impl ResolutionResult {
    /// The fallback outputs: `["terraform/ec2"]` / `"terraform/ec2"`.
    pub fn fallback() -> Self {
        Self {
            directory_options: vec![DirectoryOption::fallback()],
            default_directory: DirectoryOption::fallback(),
        }
    }

    /// Default to the first option. An empty list yields the fallback result.
    pub fn from_options(options: Vec<DirectoryOption>) -> Self {
        match options.first().cloned() {
            Some(first) => Self { directory_options: options, default_directory: first },
            None => Self::fallback(),
        }
    }

    /// Use `default` when it is one of `options`, otherwise the first option.
    ///
    /// Returns the result and whether the requested default was honored.
    pub fn with_default(options: Vec<DirectoryOption>, default: DirectoryOption) -> (Self, bool) {
        if options.contains(&default) {
            (Self { directory_options: options, default_directory: default }, true)
        } else {
            (Self::from_options(options), false)
        }
    }

    pub fn directory_options(&self) -> &[DirectoryOption] {
        &self.directory_options
    }

    pub fn default_directory(&self) -> &DirectoryOption {
        &self.default_directory
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}
