use std::path::PathBuf;

use clap::Args;

use crate::app::api;
use crate::app::configuration::ResolverSettings;
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Config file to try, in priority order (repeatable; defaults to
    /// .github/terraform-options/directories.yml then branch-modules.json)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Absolute root used to anchor relative config paths (default: $GITHUB_WORKSPACE)
    #[arg(short = 'w', long, value_name = "DIR")]
    workspace_root: Option<PathBuf>,
    /// Do not try ../<path> for relative config paths
    #[arg(long)]
    no_parent_search: bool,
}

impl ResolveArgs {
    fn into_settings(self) -> ResolverSettings {
        ResolverSettings::from_env(self.config, self.workspace_root, !self.no_parent_search)
    }
}

/// Full run through GitHub Actions outputs. Returns the process exit code.
pub fn run_resolve(args: ResolveArgs) -> i32 {
    let outcome = api::run_github(&args.into_settings());
    outcome.exit_code()
}

pub fn run_inspect(args: ResolveArgs) -> Result<(), AppError> {
    let report = api::resolve(&args.into_settings());
    let json = serde_json::to_string(&report).map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
