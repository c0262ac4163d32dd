use std::fmt;

use serde::Serialize;

/// Prefix applied to every module name in branch-module-map mode.
pub const TERRAFORM_PREFIX: &str = "terraform";

/// Safe default used whenever resolution cannot complete normally.
pub const FALLBACK_DIRECTORY: &str = "terraform/ec2";

/// A selectable deployment-target directory.
///
/// Either derived from a module name (`terraform/<module>`) or copied
/// verbatim from a direct option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DirectoryOption(String);

impl DirectoryOption {
    /// Wrap a literal option string taken from configuration.
    pub fn literal(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive `terraform/<module>` from the module name as written.
    /// Returns `None` for blank module names.
    pub fn from_module(module: &str) -> Option<Self> {
        if module.trim().is_empty() {
            return None;
        }
        Some(Self(format!("{}/{}", TERRAFORM_PREFIX, module)))
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_DIRECTORY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DirectoryOption> for String {
    fn from(val: DirectoryOption) -> Self {
        val.0
    }
}

impl PartialEq<str> for DirectoryOption {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DirectoryOption {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
