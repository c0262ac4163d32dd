//! Lenient typed views over a parsed configuration document.
//!
//! Malformed entries never abort classification. They are dropped and
//! recorded as [`SkippedEntry`] values so callers can log them.

use std::collections::HashSet;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::format::value_kind;
use crate::domain::DirectoryOption;

pub const TARGET_DIRECTORY_KEY: &str = "target_directory";
pub const OPTIONS_KEY: &str = "options";
pub const DEFAULT_KEY: &str = "default";

/// A configuration entry that was ignored, with its location in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub location: String,
    pub reason: String,
}

impl SkippedEntry {
    fn new(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { location: location.into(), reason: reason.into() }
    }
}

/// `target_directory` section: an explicit option list and optional default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryOptionsConfig {
    /// `None` when `options` is absent or not a sequence.
    pub options: Option<Vec<DirectoryOption>>,
    pub default: Option<DirectoryOption>,
}

impl DirectoryOptionsConfig {
    fn from_mapping(section: &Mapping, skipped: &mut Vec<SkippedEntry>) -> Self {
        let options = match section.get(OPTIONS_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::Sequence(entries)) => {
                let mut options = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    let location = format!("{}.{}[{}]", TARGET_DIRECTORY_KEY, OPTIONS_KEY, index);
                    match entry {
                        Value::String(s) => match unusable_string(s, "option") {
                            None => options.push(DirectoryOption::literal(s.as_str())),
                            Some(reason) => skipped.push(SkippedEntry::new(location, reason)),
                        },
                        other => skipped.push(SkippedEntry::new(
                            location,
                            format!("expected a string, found {}", value_kind(other)),
                        )),
                    }
                }
                Some(options)
            }
            Some(other) => {
                skipped.push(SkippedEntry::new(
                    format!("{}.{}", TARGET_DIRECTORY_KEY, OPTIONS_KEY),
                    format!("expected a sequence, found {}", value_kind(other)),
                ));
                None
            }
        };

        let default_location = format!("{}.{}", TARGET_DIRECTORY_KEY, DEFAULT_KEY);
        let default = match section.get(DEFAULT_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => match unusable_string(s, "default") {
                None => Some(DirectoryOption::literal(s.as_str())),
                Some(reason) => {
                    skipped.push(SkippedEntry::new(default_location, reason));
                    None
                }
            },
            Some(other) => {
                skipped.push(SkippedEntry::new(
                    default_location,
                    format!("expected a string, found {}", value_kind(other)),
                ));
                None
            }
        };

        Self { options, default }
    }
}

/// Branch name to ordered module names, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchModuleMap {
    branches: Vec<(String, Vec<String>)>,
}

impl BranchModuleMap {
    fn from_mapping(document: &Mapping, skipped: &mut Vec<SkippedEntry>) -> Self {
        let mut branches = Vec::with_capacity(document.len());

        for (key, value) in document {
            let branch = key_label(key);
            let Value::Sequence(entries) = value else {
                skipped.push(SkippedEntry::new(
                    branch,
                    format!("expected a sequence of module names, found {}", value_kind(value)),
                ));
                continue;
            };

            let mut modules = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                let location = format!("{}[{}]", branch, index);
                match entry {
                    Value::String(s) => match unusable_string(s, "module name") {
                        None => modules.push(s.clone()),
                        Some(reason) => skipped.push(SkippedEntry::new(location, reason)),
                    },
                    other => skipped.push(SkippedEntry::new(
                        location,
                        format!("expected a string, found {}", value_kind(other)),
                    )),
                }
            }
            branches.push((branch, modules));
        }

        Self { branches }
    }

    /// `terraform/<module>` for every module, first-seen order, without duplicates.
    pub fn directory_options(&self) -> Vec<DirectoryOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for (_, modules) in &self.branches {
            for option in modules.iter().filter_map(|m| DirectoryOption::from_module(m)) {
                if seen.insert(option.clone()) {
                    options.push(option);
                }
            }
        }
        options
    }
}

/// Recognized configuration shape of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigShape {
    DirectOptions(DirectoryOptionsConfig),
    BranchModuleMap(BranchModuleMap),
    /// Neither shape applies; carries a description for logging.
    Unrecognized(String),
}

/// Classification output: the shape plus every entry dropped along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDocument {
    pub shape: ConfigShape,
    pub skipped: Vec<SkippedEntry>,
}

/// Classify a document. A `target_directory` mapping takes priority over
/// branch lists when both are present.
pub fn classify(document: &Mapping) -> ClassifiedDocument {
    let mut skipped = Vec::new();

    if let Some(Value::Mapping(section)) = document.get(TARGET_DIRECTORY_KEY) {
        let config = DirectoryOptionsConfig::from_mapping(section, &mut skipped);
        return ClassifiedDocument { shape: ConfigShape::DirectOptions(config), skipped };
    }

    let has_branch_lists = document.values().any(Value::is_sequence);
    if document.is_empty() || has_branch_lists {
        let map = BranchModuleMap::from_mapping(document, &mut skipped);
        return ClassifiedDocument { shape: ConfigShape::BranchModuleMap(map), skipped };
    }

    let reason = if document.contains_key(TARGET_DIRECTORY_KEY) {
        format!("'{}' is not a mapping and no branch module lists were found", TARGET_DIRECTORY_KEY)
    } else {
        format!("missing '{}' section and no branch module lists were found", TARGET_DIRECTORY_KEY)
    };
    ClassifiedDocument { shape: ConfigShape::Unrecognized(reason), skipped }
}

/// Why a configured string cannot become an output value, if it cannot.
/// Outputs are single-line, so control characters disqualify an entry.
fn unusable_string(value: &str, what: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("blank {}", what))
    } else if value.contains(char::is_control) {
        Some(format!("{} must not contain control characters", what))
    } else {
        None
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => format!("<{} key>", value_kind(other)),
    }
}
