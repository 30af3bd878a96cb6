//! Error types for fork-sweep.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a sweep.
///
/// All fatal paths propagate one of these to the top-level handler in
/// `main`; nothing below `main` terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable credential could be resolved.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// GitHub client construction or REST-level failure.
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GraphQL-level errors reported inside an otherwise successful response.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Forge operation failure (also used for error injection in tests).
    #[error("forge error: {0}")]
    Forge(String),

    /// Transport-level octocrab error.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
