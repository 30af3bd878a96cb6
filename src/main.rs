//! fork-sweep binary entry point.

mod cli;

use clap::Parser;
use cli::Cli;
use cli::style::Stylize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so the sweep report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Single place that decides process exit behavior.
    if let Err(e) = cli::run_sweep(cli).await {
        anstream::eprintln!("{} {e}", "error:".danger());
        std::process::exit(1);
    }
}
