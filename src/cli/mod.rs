//! Command-line interface for fork-sweep.

pub mod style;
mod sweep;

pub use sweep::run_sweep;

use clap::Parser;

/// Clean up GitHub forks that no longer back open pull requests.
#[derive(Debug, Parser)]
#[command(name = "fork-sweep", version)]
pub struct Cli {
    /// GitHub username to sweep (defaults to the authenticated user)
    #[arg(short, long)]
    pub username: Option<String>,

    /// GitHub personal access token (falls back to GITHUB_TOKEN, GH_TOKEN,
    /// then `gh auth token`)
    #[arg(short, long)]
    pub token: Option<String>,

    /// GitHub Enterprise hostname (e.g. github.example.com)
    #[arg(long)]
    pub hostname: Option<String>,

    /// Report what would be deleted without deleting anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Delete forks even when they have open pull requests
    #[arg(short, long)]
    pub force: bool,
}
