//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_forge;

pub use mock_forge::MockForgeService;

use std::collections::HashSet;

/// Build an owned string vector from literals.
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Build a repository set from literals.
pub fn repo_set(values: &[&str]) -> HashSet<String> {
    values.iter().map(ToString::to_string).collect()
}
