pub mod filesystem;
pub mod github_output;

pub use filesystem::LocalFilesystem;
pub use github_output::GitHubOutputSink;
