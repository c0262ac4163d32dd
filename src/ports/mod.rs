mod output_sink;
mod repository_filesystem;

pub use output_sink::OutputSink;
pub use repository_filesystem::RepositoryFilesystem;
