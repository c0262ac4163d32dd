//! `RepositoryFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::LocalFilesystem;

impl RepositoryFilesystem for LocalFilesystem {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }
}
