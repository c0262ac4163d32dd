//! Read-only filesystem access for configuration discovery.

use std::path::Path;

use crate::domain::AppError;

/// Port for the file operations the locator performs.
///
/// Paths are passed through as given: relative paths resolve against the
/// process working directory, absolute paths are used as-is.
pub trait RepositoryFilesystem {
    /// Check whether a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;
}
