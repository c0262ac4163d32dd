//! Filesystem adapter for the locator's read-only port.

mod repository_filesystem;

/// Reads configuration straight from the local filesystem.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}
