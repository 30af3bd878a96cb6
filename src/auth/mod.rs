//! Token resolution for the GitHub API.
//!
//! Supports an explicit `--token` flag, environment variables, and the
//! `gh` CLI's stored credential, in that order.

use crate::error::{Error, Result};
use std::process::Command;

/// Source a token was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed on the command line.
    Flag,
    /// Token from `GITHUB_TOKEN` or `GH_TOKEN`.
    EnvVar,
    /// Token from `gh auth token`.
    GhCli,
}

/// A resolved credential and where it came from.
#[derive(Debug, Clone)]
pub struct AuthToken {
    /// The token value.
    pub token: String,
    /// Where the token was found.
    pub source: AuthSource,
}

/// Resolve a GitHub token.
///
/// Order: `--token` flag, `GITHUB_TOKEN`, `GH_TOKEN`, then `gh auth token`.
/// Fails with [`Error::Auth`] when none of the sources yields a token.
pub fn resolve_token(flag: Option<&str>) -> Result<AuthToken> {
    resolve_token_with(flag, |name| std::env::var(name).ok(), gh_cli_token)
}

fn resolve_token_with(
    flag: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
    gh_cli: impl Fn() -> Option<String>,
) -> Result<AuthToken> {
    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(AuthToken {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    for name in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Some(token) = env(name).filter(|t| !t.trim().is_empty()) {
            return Ok(AuthToken {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(token) = gh_cli() {
        return Ok(AuthToken {
            token,
            source: AuthSource::GhCli,
        });
    }

    Err(Error::Auth(
        "no GitHub token found; pass --token, set GITHUB_TOKEN, or log in with 'gh auth login'"
            .to_string(),
    ))
}

/// Ask the `gh` CLI for its stored token.
fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
