//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file storage shared with `MockRepositoryFs`.
///
/// Tests seed files via this handle before passing the port double to
/// production code. Keys are paths exactly as the locator will request them.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub(crate) unreadable: Arc<Mutex<Vec<PathBuf>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: impl AsRef<Path>, content: &str) {
        self.files.lock().unwrap().insert(path.as_ref().to_path_buf(), content.to_string());
    }

    /// Mark a path as existing but failing on read.
    pub fn add_unreadable(&self, path: impl AsRef<Path>) {
        self.unreadable.lock().unwrap().push(path.as_ref().to_path_buf());
    }
}
