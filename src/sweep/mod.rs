//! Fork sweeping engine.
//!
//! Three-phase pattern:
//! 1. Gather - list forks and open-PR repositories (effectful, in the CLI)
//! 2. Plan - classify forks and decide delete/skip (pure, testable)
//! 3. Execute - perform deletions via the forge API (effectful)

mod execute;
mod plan;

pub use execute::{NullReporter, SweepOutcome, SweepReporter, execute_sweep};
pub use plan::{SweepAction, SweepPlan, SweepStep, classify, create_sweep_plan, decide};
