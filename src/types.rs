//! Core types for fork-sweep.

use serde::{Deserialize, Serialize};

/// A fork classified against the open-pull-request repository set.
///
/// Repository identity is the `owner/name` string GitHub exposes as
/// `nameWithOwner`; equality is exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkRecord {
    /// Repository identifier in `owner/name` form.
    pub name_with_owner: String,
    /// Whether any of the user's open pull requests has its head branch
    /// in this repository.
    pub has_open_prs: bool,
}
