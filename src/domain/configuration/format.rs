//! Pure parse of configuration documents into an ordered mapping.
//!
//! All supported formats are normalized into a `serde_yaml::Mapping`, which
//! keeps keys in declared order.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Structured text format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Select a format from the file extension. Unknown extensions are read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "json" => ConfigFormat::Json,
            Some(ext) if ext == "toml" => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// Parse `content` into a top-level mapping.
///
/// Empty documents and documents whose root is not a mapping are parse errors.
pub fn parse_document(content: &str, format: ConfigFormat, path: &str) -> Result<Mapping, AppError> {
    let parse_error = |details: String| AppError::ConfigParse {
        path: path.to_string(),
        format: format.label().to_string(),
        details,
    };

    let value = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str::<Value>(content).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Json => {
            let json: serde_json::Value =
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            serde_yaml::to_value(json).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            serde_yaml::to_value(table).map_err(|e| parse_error(e.to_string()))?
        }
    };

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err(parse_error("document is empty".to_string())),
        other => Err(parse_error(format!(
            "expected a mapping at the top level, found {}",
            value_kind(&other)
        ))),
    }
}

/// Short human-readable name of a value's type, used in log lines.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
