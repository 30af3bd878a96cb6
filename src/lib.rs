//! Fork sweeping for GitHub accounts.
//!
//! The library lists a user's forked repositories, cross-references them
//! against repositories that back the user's open pull requests, and
//! deletes the forks that no longer serve any open pull request. The
//! binary in `src/main.rs` wraps this in a CLI; everything here is
//! testable without touching the network through the [`platform::ForgeService`]
//! seam.

pub mod auth;
pub mod error;
pub mod platform;
pub mod sweep;
pub mod types;

pub use error::{Error, Result};
