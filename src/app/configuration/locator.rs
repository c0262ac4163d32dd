//! First-match configuration discovery over an ordered candidate list.

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use tracing::{info, warn};

use crate::domain::configuration::{ConfigFormat, parse_document};
use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// A candidate that exists and parsed into a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedConfig {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub document: Mapping,
}

/// Return the first candidate that exists and parses.
///
/// Missing, unreadable, and unparseable candidates are logged and skipped.
/// `ConfigNotFound` is returned only after every candidate was tried.
pub fn locate(
    fs: &impl RepositoryFilesystem,
    candidates: &[PathBuf],
) -> Result<LocatedConfig, AppError> {
    for path in candidates {
        match try_candidate(fs, path) {
            Ok(Some(located)) => {
                info!(path = %path.display(), format = located.format.label(), "Using configuration file");
                return Ok(located);
            }
            Ok(None) => info!(path = %path.display(), "Configuration file not found"),
            Err(err) => warn!(path = %path.display(), error = %err, "Skipping configuration candidate"),
        }
    }

    let tried: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
    info!(candidates = tried.len(), "No configuration file found");
    Err(AppError::ConfigNotFound { tried })
}

fn try_candidate(
    fs: &impl RepositoryFilesystem,
    path: &Path,
) -> Result<Option<LocatedConfig>, AppError> {
    if !fs.file_exists(path) {
        return Ok(None);
    }

    let format = ConfigFormat::from_path(path);
    let content = fs.read_file(path)?;
    let document = parse_document(&content, format, &path.display().to_string())?;
    Ok(Some(LocatedConfig { path: path.to_path_buf(), format, document }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockRepositoryFs, TestFiles};

    fn paths(values: &[&str]) -> Vec<PathBuf> {
        values.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn first_existing_candidate_wins() {
        let files = TestFiles::new();
        files.add("b.yml", "main: [s3]\n");
        files.add("c.yml", "main: [vpc]\n");
        let fs = MockRepositoryFs::new(files);

        let located = locate(&fs, &paths(&["a.yml", "b.yml", "c.yml"])).unwrap();
        assert_eq!(located.path, PathBuf::from("b.yml"));
        assert_eq!(fs.reads(), vec!["b.yml"]);
    }

    #[test]
    fn malformed_candidate_does_not_block_the_next() {
        let files = TestFiles::new();
        files.add("a.json", "{ not json");
        files.add("../a.json", r#"{"main": ["ec2"]}"#);
        let fs = MockRepositoryFs::new(files);

        let located = locate(&fs, &paths(&["a.json", "../a.json"])).unwrap();
        assert_eq!(located.path, PathBuf::from("../a.json"));
        assert_eq!(located.format, ConfigFormat::Json);
    }

    #[test]
    fn non_mapping_document_is_skipped() {
        let files = TestFiles::new();
        files.add("a.yml", "- terraform/ec2\n");
        files.add("b.yml", "");
        let fs = MockRepositoryFs::new(files);

        let err = locate(&fs, &paths(&["a.yml", "b.yml"])).unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound { .. }));
    }

    #[test]
    fn unreadable_candidate_is_skipped() {
        let files = TestFiles::new();
        files.add_unreadable("a.yml");
        files.add("b.yml", "dev: [rds]\n");
        let fs = MockRepositoryFs::new(files);

        let located = locate(&fs, &paths(&["a.yml", "b.yml"])).unwrap();
        assert_eq!(located.path, PathBuf::from("b.yml"));
        assert_eq!(fs.reads(), vec!["a.yml", "b.yml"]);
    }

    #[test]
    fn not_found_lists_every_candidate() {
        let fs = MockRepositoryFs::new(TestFiles::new());

        let err = locate(&fs, &paths(&["a.yml", "/w/a.yml", "../a.yml"])).unwrap_err();
        let AppError::ConfigNotFound { tried } = err else {
            panic!("expected ConfigNotFound");
        };
        assert_eq!(tried, vec!["a.yml", "/w/a.yml", "../a.yml"]);
        assert!(fs.reads().is_empty());
    }

    #[test]
    fn empty_candidate_list_is_not_found() {
        let fs = MockRepositoryFs::new(TestFiles::new());
        assert!(matches!(locate(&fs, &[]), Err(AppError::ConfigNotFound { .. })));
    }
}
