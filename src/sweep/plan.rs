//! Sweep planning - pure functions for classifying forks.
//!
//! This module contains the pure, testable logic for deciding which forks
//! to delete. No I/O happens here - all data is passed in, making it easy
//! to unit test.

use crate::types::ForkRecord;
use std::collections::HashSet;

/// Classify forks against the open-pull-request repository set.
///
/// Produces a lazy, order-preserving sequence of [`ForkRecord`]; a fork
/// is marked `has_open_prs` iff its identifier appears in `open_pr_repos`
/// (exact string equality). Single pass, not restartable.
pub fn classify<'a, I>(
    forks: I,
    open_pr_repos: &'a HashSet<String>,
) -> impl Iterator<Item = ForkRecord> + 'a
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    forks.into_iter().map(move |name_with_owner| {
        let has_open_prs = open_pr_repos.contains(&name_with_owner);
        ForkRecord {
            name_with_owner,
            has_open_prs,
        }
    })
}

/// Action decided for a classified fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAction {
    /// Delete the fork.
    Delete,
    /// Keep the fork (it backs open pull requests).
    Skip,
}

/// Decide the action for one fork record.
///
/// Delete when forced, or when the fork backs no open pull request.
/// Pure function of the record and the force flag.
#[must_use]
pub const fn decide(record: &ForkRecord, force: bool) -> SweepAction {
    if force || !record.has_open_prs {
        SweepAction::Delete
    } else {
        SweepAction::Skip
    }
}

/// A single step in the sweep plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepStep {
    /// Delete this fork.
    Delete {
        /// Repository identifier in `owner/name` form.
        name_with_owner: String,
        /// Whether the fork backs open pull requests (true only under force).
        has_open_prs: bool,
    },
    /// Keep this fork (open pull requests present).
    Skip {
        /// Repository identifier in `owner/name` form.
        name_with_owner: String,
    },
}

impl SweepStep {
    /// Get the repository identifier for this step.
    #[must_use]
    pub fn name_with_owner(&self) -> &str {
        match self {
            Self::Delete {
                name_with_owner, ..
            }
            | Self::Skip { name_with_owner } => name_with_owner,
        }
    }
}

impl std::fmt::Display for SweepStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete {
                name_with_owner,
                has_open_prs,
            } => {
                write!(f, "delete {name_with_owner}")?;
                if *has_open_prs {
                    write!(f, " (has open pull requests)")?;
                }
                Ok(())
            }
            Self::Skip { name_with_owner } => {
                write!(f, "skip {name_with_owner} (has open pull requests)")
            }
        }
    }
}

/// Sweep plan - the functional core output.
///
/// A pure data structure describing the deletions and skips to perform,
/// in fork-listing order. Created by [`create_sweep_plan`] (pure) and
/// executed by [`execute_sweep`](crate::sweep::execute_sweep) (effectful).
#[derive(Debug, Clone, Default)]
pub struct SweepPlan {
    /// Ordered steps to perform.
    pub steps: Vec<SweepStep>,
}

impl SweepPlan {
    /// Check if the plan has no steps at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Count planned deletions.
    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, SweepStep::Delete { .. }))
            .count()
    }

    /// Count planned skips.
    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, SweepStep::Skip { .. }))
            .count()
    }
}

/// Create a sweep plan (PURE - no I/O, easily testable).
///
/// Classifies each fork against `open_pr_repos` and decides delete vs
/// skip per record. Step order matches the fork listing order.
#[must_use]
pub fn create_sweep_plan(
    forks: Vec<String>,
    open_pr_repos: &HashSet<String>,
    force: bool,
) -> SweepPlan {
    let steps = classify(forks, open_pr_repos)
        .map(|record| match decide(&record, force) {
            SweepAction::Delete => SweepStep::Delete {
                name_with_owner: record.name_with_owner,
                has_open_prs: record.has_open_prs,
            },
            SweepAction::Skip => SweepStep::Skip {
                name_with_owner: record.name_with_owner,
            },
        })
        .collect();

    SweepPlan { steps }
}
