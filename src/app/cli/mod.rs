//! CLI Adapter.

mod resolve;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tfdirs")]
#[command(version)]
#[command(
    about = "Resolve Terraform directory options and publish them as workflow outputs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve directory options and write directory_options/default_directory outputs
    #[clap(visible_alias = "r")]
    Resolve(resolve::ResolveArgs),
    /// Print the resolution as JSON without writing workflow outputs
    #[clap(visible_alias = "i")]
    Inspect(resolve::ResolveArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Resolve(args) => Ok(resolve::run_resolve(args)),
        Commands::Inspect(args) => resolve::run_inspect(args).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only workflow output lines.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "tfdirs=debug" } else { "tfdirs=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
