pub mod ports;

pub use ports::MockRepositoryFs;
pub use ports::RecordingSink;
pub use ports::TestFiles;
