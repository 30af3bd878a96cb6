//! Sweep execution - effectful operations.
//!
//! Takes a `SweepPlan` (created by the pure planning functions) and
//! performs the deletions via the forge API. Deletions run strictly in
//! plan order; the first failure halts the run and propagates.

use crate::error::Result;
use crate::platform::ForgeService;
use crate::sweep::plan::{SweepPlan, SweepStep};
use async_trait::async_trait;

/// Per-record outcome reporting during execution.
///
/// Every record is reported exactly once, dry-run or not. The CLI
/// implements this with styled output; tests use [`NullReporter`] or a
/// recording implementation.
#[async_trait]
pub trait SweepReporter: Send + Sync {
    /// A fork was deleted.
    async fn deleted(&self, name_with_owner: &str);

    /// A fork would have been deleted (dry-run).
    async fn would_delete(&self, name_with_owner: &str);

    /// A fork was kept because it backs open pull requests.
    async fn skipped(&self, name_with_owner: &str);
}

/// Reporter that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

#[async_trait]
impl SweepReporter for NullReporter {
    async fn deleted(&self, _name_with_owner: &str) {}
    async fn would_delete(&self, _name_with_owner: &str) {}
    async fn skipped(&self, _name_with_owner: &str) {}
}

/// Result of sweep execution.
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Forks deleted, in execution order.
    pub deleted: Vec<String>,
    /// Forks that would have been deleted (dry-run), in execution order.
    pub would_delete: Vec<String>,
    /// Forks kept because of open pull requests, in execution order.
    pub skipped: Vec<String>,
}

impl SweepOutcome {
    /// Check whether the sweep had nothing to act on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.would_delete.is_empty() && self.skipped.is_empty()
    }
}

/// Execute the sweep plan (EFFECTFUL).
///
/// Walks the plan in order. Delete steps invoke the forge's delete
/// capability unless `dry_run` is set; skip steps only report. A delete
/// failure aborts the remaining run immediately - no retry, no
/// partial-failure recovery - and the error propagates to the caller.
pub async fn execute_sweep(
    plan: &SweepPlan,
    forge: &dyn ForgeService,
    reporter: &dyn SweepReporter,
    dry_run: bool,
) -> Result<SweepOutcome> {
    let mut outcome = SweepOutcome::default();

    for step in &plan.steps {
        match step {
            SweepStep::Delete {
                name_with_owner, ..
            } => {
                if dry_run {
                    reporter.would_delete(name_with_owner).await;
                    outcome.would_delete.push(name_with_owner.clone());
                } else {
                    forge.delete_repository(name_with_owner).await?;
                    reporter.deleted(name_with_owner).await;
                    outcome.deleted.push(name_with_owner.clone());
                }
            }
            SweepStep::Skip { name_with_owner } => {
                reporter.skipped(name_with_owner).await;
                outcome.skipped.push(name_with_owner.clone());
            }
        }
    }

    Ok(outcome)
}
