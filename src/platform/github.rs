//! GitHub forge service implementation.

use crate::error::{Error, Result};
use crate::platform::ForgeService;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

/// Page size for all paginated GraphQL queries.
const PAGE_SIZE: u32 = 50;

const VIEWER_QUERY: &str = r"
    query Viewer {
        viewer {
            login
        }
    }
";

const FORKS_QUERY: &str = r"
    query Forks($login: String!, $cursor: String, $pageSize: Int!) {
        user(login: $login) {
            repositories(first: $pageSize, after: $cursor, affiliations: [OWNER], isFork: true) {
                nodes {
                    nameWithOwner
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
";

const OPEN_PRS_QUERY: &str = r"
    query OpenPullRequests($login: String!, $cursor: String, $pageSize: Int!) {
        user(login: $login) {
            pullRequests(states: [OPEN], first: $pageSize, after: $cursor) {
                nodes {
                    headRef {
                        repository {
                            nameWithOwner
                        }
                    }
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
";

// GraphQL response envelope and per-query payload types

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Paged<N> {
    nodes: Vec<N>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoNode {
    name_with_owner: String,
}

#[derive(Deserialize)]
struct ViewerData {
    viewer: ViewerNode,
}

#[derive(Deserialize)]
struct ViewerNode {
    login: String,
}

#[derive(Deserialize)]
struct ForksData {
    user: Option<ForksUser>,
}

#[derive(Deserialize)]
struct ForksUser {
    repositories: Paged<RepoNode>,
}

#[derive(Deserialize)]
struct OpenPrsData {
    user: Option<OpenPrsUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenPrsUser {
    pull_requests: Paged<PullRequestNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    // Null when the head branch (or its repository) was deleted.
    head_ref: Option<HeadRef>,
}

#[derive(Deserialize)]
struct HeadRef {
    repository: RepoNode,
}

/// Unwrap a GraphQL response envelope, surfacing error payloads.
fn graphql_data<T>(response: GraphQlResponse<T>) -> Result<T> {
    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::GraphQl(messages.join(", ")));
    }

    response
        .data
        .ok_or_else(|| Error::GraphQl("no data in response".to_string()))
}

/// GitHub service using octocrab.
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a service against github.com, or a GitHub Enterprise host
    /// when `host` is given (maps to `https://{host}/api/v3`).
    pub fn new(token: &str, host: Option<&str>) -> Result<Self> {
        match host {
            Some(h) => Self::with_base_uri(token, &format!("https://{h}/api/v3")),
            None => {
                let client = Octocrab::builder()
                    .personal_token(token.to_string())
                    .build()
                    .map_err(|e| Error::GitHubApi(e.to_string()))?;
                Ok(Self { client })
            }
        }
    }

    /// Create a service against an explicit API base URI.
    ///
    /// Used for Enterprise deployments and test servers.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_uri)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
        Ok(Self { client })
    }

    /// Run one page of a paginated user query.
    async fn query_page<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        login: &str,
        cursor: Option<&str>,
    ) -> Result<T> {
        let response: GraphQlResponse<T> = self
            .client
            .graphql(&serde_json::json!({
                "query": query,
                "variables": {
                    "login": login,
                    "cursor": cursor,
                    "pageSize": PAGE_SIZE,
                }
            }))
            .await?;

        graphql_data(response)
    }
}

#[async_trait]
impl ForgeService for GitHubService {
    async fn viewer_login(&self) -> Result<String> {
        debug!("resolving authenticated login");
        let response: GraphQlResponse<ViewerData> = self
            .client
            .graphql(&serde_json::json!({ "query": VIEWER_QUERY }))
            .await?;

        let data = graphql_data(response)?;
        debug!(login = %data.viewer.login, "resolved authenticated login");
        Ok(data.viewer.login)
    }

    async fn list_forks(&self, login: &str) -> Result<Vec<String>> {
        debug!(login, "listing forks");
        let mut forks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let data: ForksData = self
                .query_page(FORKS_QUERY, login, cursor.as_deref())
                .await?;

            let user = data
                .user
                .ok_or_else(|| Error::GitHubApi(format!("user not found: {login}")))?;

            let page = user.repositories;
            debug!(count = page.nodes.len(), "fork page received");
            forks.extend(page.nodes.into_iter().map(|n| n.name_with_owner));

            if !page.page_info.has_next_page {
                break;
            }
            cursor = page.page_info.end_cursor;
        }

        debug!(login, total = forks.len(), "listed forks");
        Ok(forks)
    }

    async fn repos_with_open_pull_requests(&self, login: &str) -> Result<Vec<String>> {
        debug!(login, "listing open pull request repositories");
        let mut repos = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let data: OpenPrsData = self
                .query_page(OPEN_PRS_QUERY, login, cursor.as_deref())
                .await?;

            let user = data
                .user
                .ok_or_else(|| Error::GitHubApi(format!("user not found: {login}")))?;

            let page = user.pull_requests;
            debug!(count = page.nodes.len(), "pull request page received");
            repos.extend(
                page.nodes
                    .into_iter()
                    .filter_map(|n| n.head_ref)
                    .map(|h| h.repository.name_with_owner),
            );

            if !page.page_info.has_next_page {
                break;
            }
            cursor = page.page_info.end_cursor;
        }

        debug!(login, total = repos.len(), "listed open pull request repositories");
        Ok(repos)
    }

    async fn delete_repository(&self, name_with_owner: &str) -> Result<()> {
        let (owner, repo) = name_with_owner.split_once('/').ok_or_else(|| {
            Error::GitHubApi(format!("malformed repository name: {name_with_owner}"))
        })?;

        debug!(name_with_owner, "deleting repository");
        self.client.repos(owner, repo).delete().await?;
        debug!(name_with_owner, "deleted repository");
        Ok(())
    }
}
