//! Sweep command - delete forks without open pull requests.

use crate::cli::Cli;
use crate::cli::style::{CHECK, Stylize, check, spinner_style};
use anstream::println;
use async_trait::async_trait;
use fork_sweep::auth::resolve_token;
use fork_sweep::error::Result;
use fork_sweep::platform::{ForgeService, GitHubService};
use fork_sweep::sweep::{SweepReporter, create_sweep_plan, execute_sweep};
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Run the sweep command.
pub async fn run_sweep(cli: Cli) -> Result<()> {
    if cli.dry_run {
        println!(
            "{}",
            "Dry-run mode: no repositories will be deleted.".warn()
        );
    }
    if cli.force {
        println!(
            "{}",
            "Force mode: forks with open pull requests will be deleted too.".danger()
        );
    }

    let auth = resolve_token(cli.token.as_deref())?;
    debug!(source = ?auth.source, "resolved token");
    let forge = GitHubService::new(&auth.token, cli.hostname.as_deref())?;

    // =========================================================================
    // Phase 1: GATHER - Collect all data upfront
    // =========================================================================

    // Resolve the target user. A failed lookup aborts the run rather than
    // sweeping an empty login.
    let login = match cli.username {
        Some(u) => u,
        None => forge.viewer_login().await?,
    };
    println!("Running as: {}", login.accent());

    let spinner = fetch_spinner(format!("Listing forks for {login}..."));
    let forks = forge.list_forks(&login).await?;
    spinner.finish_with_message(format!(
        "{} Found {} fork(s)",
        check(),
        forks.len().accent()
    ));

    let spinner = fetch_spinner("Listing open pull requests...".to_string());
    let open_pr_repos: HashSet<String> = forge
        .repos_with_open_pull_requests(&login)
        .await?
        .into_iter()
        .collect();
    spinner.finish_with_message(format!(
        "{} {} repositories back open pull requests",
        check(),
        open_pr_repos.len().accent()
    ));

    if forks.is_empty() {
        println!("{}", format!("{login} has no forks - nothing to sweep.").muted());
        return Ok(());
    }

    // =========================================================================
    // Phase 2: PLAN - Pure function, easily testable
    // =========================================================================

    let plan = create_sweep_plan(forks, &open_pr_repos, cli.force);

    // =========================================================================
    // Phase 3: EXECUTE - Effectful operations
    // =========================================================================

    let reporter = CliReporter;
    let outcome = execute_sweep(&plan, &forge, &reporter, cli.dry_run).await?;

    println!();
    if cli.dry_run {
        println!(
            "{}",
            format!(
                "Dry run complete: {} would be deleted, {} skipped",
                outcome.would_delete.len(),
                outcome.skipped.len()
            )
            .muted()
        );
    } else {
        println!(
            "{} {} deleted, {} skipped",
            format!("{CHECK} Sweep complete:").success(),
            outcome.deleted.len().accent(),
            outcome.skipped.len().accent()
        );
    }

    Ok(())
}

fn fetch_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Reporter printing one styled line per record.
struct CliReporter;

#[async_trait]
impl SweepReporter for CliReporter {
    async fn deleted(&self, name_with_owner: &str) {
        println!("{} {name_with_owner}", "[DELETED]".success());
    }

    async fn would_delete(&self, name_with_owner: &str) {
        println!("{} {name_with_owner}", "[WOULD DELETE]".accent());
    }

    async fn skipped(&self, name_with_owner: &str) {
        println!(
            "{} {name_with_owner} {}",
            "[SKIPPED]".warn(),
            "(has open pull requests)".muted()
        );
    }
}
