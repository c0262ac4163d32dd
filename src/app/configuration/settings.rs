//! Resolver settings and candidate path expansion.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Configuration files searched when none are given explicitly, in priority order.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    [".github/terraform-options/directories.yml", ".github/terraform-options/branch-modules.json"];

/// Runner-provided absolute checkout directory.
pub const GITHUB_WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Inputs to the locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Configured config paths, highest priority first.
    pub config_paths: Vec<PathBuf>,
    /// Absolute working-directory root used to anchor relative config paths.
    pub workspace_root: Option<PathBuf>,
    /// Also try `../<path>` for each relative config path.
    pub search_parent: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            config_paths: DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
            workspace_root: None,
            search_parent: true,
        }
    }
}

impl ResolverSettings {
    /// Build settings from explicit values, falling back to defaults and
    /// `GITHUB_WORKSPACE` for whatever is not given.
    pub fn from_env(
        config_paths: Vec<PathBuf>,
        workspace_root: Option<PathBuf>,
        search_parent: bool,
    ) -> Self {
        let defaults = Self::default();
        let config_paths =
            if config_paths.is_empty() { defaults.config_paths } else { config_paths };
        let workspace_root = workspace_root.or_else(|| {
            std::env::var_os(GITHUB_WORKSPACE_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });
        Self { config_paths, workspace_root, search_parent }
    }

    /// Expand configured paths into the ordered candidate list.
    ///
    /// Per relative path: as given, anchored at the workspace root, then the
    /// parent-directory variant. Absolute paths are used verbatim. Duplicates
    /// (after logical normalization) keep their first position.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut push = |path: PathBuf| {
            if seen.insert(normalize_path(&path)) {
                candidates.push(path);
            }
        };

        for path in &self.config_paths {
            if path.is_absolute() {
                push(path.clone());
                continue;
            }
            push(path.clone());
            if let Some(root) = &self.workspace_root {
                push(root.join(path));
            }
            if self.search_parent {
                push(Path::new("..").join(path));
            }
        }

        candidates
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem. Leading `..` on relative paths is kept.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(ret.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    ret.pop();
                } else if !ret.has_root() {
                    ret.push("..");
                }
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
