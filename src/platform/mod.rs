//! Forge services for the GitHub API.
//!
//! Provides the seam between the sweep logic and the hosted API, so the
//! sweep can be exercised against a mock in tests.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use async_trait::async_trait;

/// Forge service trait for the API operations a sweep needs.
///
/// Implementations own authentication and pagination; callers see
/// fully-assembled lists. All listings preserve the order the forge
/// returned pages in.
#[async_trait]
pub trait ForgeService: Send + Sync {
    /// Login of the authenticated caller.
    async fn viewer_login(&self) -> Result<String>;

    /// All forked repositories owned by `login`, as `owner/name` strings.
    async fn list_forks(&self, login: &str) -> Result<Vec<String>>;

    /// Repositories holding the head branch of at least one open pull
    /// request authored by `login`, as `owner/name` strings.
    async fn repos_with_open_pull_requests(&self, login: &str) -> Result<Vec<String>>;

    /// Delete a repository by its `owner/name` identifier.
    async fn delete_repository(&self, name_with_owner: &str) -> Result<()>;
}
