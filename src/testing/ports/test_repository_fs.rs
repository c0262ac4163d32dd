//! Test double for `RepositoryFilesystem`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Records every path passed to `read_file`, in call order.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, reads: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
            || self.files.unreadable.lock().unwrap().iter().any(|p| p == path)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.reads.lock().unwrap().push(path.display().to_string());
        if self.files.unreadable.lock().unwrap().iter().any(|p| p == path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock file is unreadable",
            )));
        }
        self.files.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }
}
