use std::io;

use thiserror::Error;

/// Library-wide error type for tfdirs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// None of the candidate configuration paths exist.
    #[error("No configuration file found (tried: {})", tried.join(", "))]
    ConfigNotFound { tried: Vec<String> },

    /// A candidate exists but its content is not a parseable mapping.
    #[error("Failed to parse {format} config at '{path}': {details}")]
    ConfigParse { path: String, format: String, details: String },

    /// The document parsed but matches no recognized configuration shape.
    #[error("Unrecognized configuration format: {0}")]
    ConfigShape(String),

    /// The pipeline output mechanism rejected a value.
    #[error("Failed to emit output '{name}': {details}")]
    OutputEmission { name: String, details: String },

    /// Output values could not be encoded.
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn emission<N: Into<String>, D: ToString>(name: N, details: D) -> Self {
        AppError::OutputEmission { name: name.into(), details: details.to_string() }
    }
}
