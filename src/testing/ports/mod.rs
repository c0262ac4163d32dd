mod recording_sink;
mod test_files;
mod test_repository_fs;

pub use self::recording_sink::RecordingSink;
pub use self::test_files::TestFiles;
pub use self::test_repository_fs::MockRepositoryFs;
