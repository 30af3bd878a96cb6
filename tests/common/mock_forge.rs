//! Mock forge service for testing.
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use fork_sweep::error::{Error, Result};
use fork_sweep::platform::ForgeService;
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock forge service for testing.
///
/// Features:
/// - Configurable responses per login
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockForgeService {
    viewer_login: String,
    forks_responses: Mutex<HashMap<String, Vec<String>>>,
    pr_repo_responses: Mutex<HashMap<String, Vec<String>>>,
    // Call tracking
    viewer_login_calls: Mutex<u64>,
    list_forks_calls: Mutex<Vec<String>>,
    list_pr_repos_calls: Mutex<Vec<String>>,
    delete_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_viewer_login: Mutex<Option<String>>,
    error_on_list_forks: Mutex<Option<String>>,
    error_on_list_pr_repos: Mutex<Option<String>>,
    error_on_delete_of: Mutex<Option<(String, String)>>,
}

impl MockForgeService {
    /// Create a new mock whose authenticated user is `viewer_login`.
    pub fn new(viewer_login: &str) -> Self {
        Self {
            viewer_login: viewer_login.to_string(),
            forks_responses: Mutex::new(HashMap::new()),
            pr_repo_responses: Mutex::new(HashMap::new()),
            viewer_login_calls: Mutex::new(0),
            list_forks_calls: Mutex::new(Vec::new()),
            list_pr_repos_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
            error_on_viewer_login: Mutex::new(None),
            error_on_list_forks: Mutex::new(None),
            error_on_list_pr_repos: Mutex::new(None),
            error_on_delete_of: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Set the fork listing for a login.
    pub fn set_forks(&self, login: &str, forks: &[&str]) {
        self.forks_responses.lock().unwrap().insert(
            login.to_string(),
            forks.iter().map(ToString::to_string).collect(),
        );
    }

    /// Set the open-PR repository listing for a login.
    pub fn set_pr_repos(&self, login: &str, repos: &[&str]) {
        self.pr_repo_responses.lock().unwrap().insert(
            login.to_string(),
            repos.iter().map(ToString::to_string).collect(),
        );
    }

    // === Error injection methods ===

    /// Make `viewer_login` return an error.
    pub fn fail_viewer_login(&self, msg: &str) {
        *self.error_on_viewer_login.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_forks` return an error.
    pub fn fail_list_forks(&self, msg: &str) {
        *self.error_on_list_forks.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `repos_with_open_pull_requests` return an error.
    pub fn fail_list_pr_repos(&self, msg: &str) {
        *self.error_on_list_pr_repos.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `delete_repository` fail when asked to delete `name_with_owner`.
    pub fn fail_delete_of(&self, name_with_owner: &str, msg: &str) {
        *self.error_on_delete_of.lock().unwrap() =
            Some((name_with_owner.to_string(), msg.to_string()));
    }

    // === Call verification methods ===

    /// Number of `viewer_login` calls.
    pub fn viewer_login_call_count(&self) -> u64 {
        *self.viewer_login_calls.lock().unwrap()
    }

    /// Logins that `list_forks` was called with.
    pub fn get_list_forks_calls(&self) -> Vec<String> {
        self.list_forks_calls.lock().unwrap().clone()
    }

    /// Logins that `repos_with_open_pull_requests` was called with.
    pub fn get_list_pr_repos_calls(&self) -> Vec<String> {
        self.list_pr_repos_calls.lock().unwrap().clone()
    }

    /// Repositories that `delete_repository` was called with, in order.
    pub fn get_delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Assert that `delete_repository` was called exactly with `expected`,
    /// in order.
    pub fn assert_deleted_exactly(&self, expected: &[&str]) {
        let calls = self.get_delete_calls();
        assert_eq!(
            calls, expected,
            "Expected deletes {expected:?} but got: {calls:?}"
        );
    }

    /// Assert that `delete_repository` was never called.
    pub fn assert_no_deletes(&self) {
        let calls = self.get_delete_calls();
        assert!(
            calls.is_empty(),
            "Expected no delete calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl ForgeService for MockForgeService {
    async fn viewer_login(&self) -> Result<String> {
        *self.viewer_login_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_viewer_login.lock().unwrap().as_ref() {
            return Err(Error::Forge(msg.clone()));
        }

        Ok(self.viewer_login.clone())
    }

    async fn list_forks(&self, login: &str) -> Result<Vec<String>> {
        self.list_forks_calls.lock().unwrap().push(login.to_string());

        if let Some(msg) = self.error_on_list_forks.lock().unwrap().as_ref() {
            return Err(Error::Forge(msg.clone()));
        }

        let responses = self.forks_responses.lock().unwrap();
        Ok(responses.get(login).cloned().unwrap_or_default())
    }

    async fn repos_with_open_pull_requests(&self, login: &str) -> Result<Vec<String>> {
        self.list_pr_repos_calls
            .lock()
            .unwrap()
            .push(login.to_string());

        if let Some(msg) = self.error_on_list_pr_repos.lock().unwrap().as_ref() {
            return Err(Error::Forge(msg.clone()));
        }

        let responses = self.pr_repo_responses.lock().unwrap();
        Ok(responses.get(login).cloned().unwrap_or_default())
    }

    async fn delete_repository(&self, name_with_owner: &str) -> Result<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push(name_with_owner.to_string());

        if let Some((name, msg)) = self.error_on_delete_of.lock().unwrap().as_ref()
            && name == name_with_owner
        {
            return Err(Error::Forge(msg.clone()));
        }

        Ok(())
    }
}
