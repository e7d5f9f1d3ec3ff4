//! Repository operations.
//!
//! Branch and commit endpoints hang off the same service; see the
//! `branches` and `commits` modules.

use super::{require, user_path};
use crate::client::GiteeClient;
use crate::errors::GiteeResult;
use crate::pagination::{ListOptions, Page, Response};
use crate::types::Repository;
use serde::{Deserialize, Serialize};

/// Service for repository operations.
pub struct RepositoriesService<'a> {
    pub(super) client: &'a GiteeClient,
}

impl<'a> RepositoriesService<'a> {
    /// Creates a new repositories service.
    pub fn new(client: &'a GiteeClient) -> Self {
        Self { client }
    }

    /// Lists repositories of `user`, or of the authenticated user when empty.
    pub async fn list(
        &self,
        user: &str,
        opts: &RepositoryListOptions,
    ) -> GiteeResult<Page<Repository>> {
        let path = user_path(user, "user/repos", |u| format!("users/{}/repos", u))?;
        self.client.get_page(&path, opts).await
    }

    /// Gets a repository.
    pub async fn get(&self, owner: &str, repo: &str) -> GiteeResult<Response<Repository>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        self.client.get(&format!("repos/{}/{}", owner, repo)).await
    }
}

/// Options for listing repositories.
///
/// `visibility`, `affiliation` and `type` are only honoured for the
/// authenticated user's listing, and Gitee rejects `type` combined with
/// either of the other two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryListOptions {
    /// `public`, `private` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Comma separated `owner`, `collaborator`, `organization_member`,
    /// `enterprise_member`, `admin`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    /// `all`, `owner`, `public`, `private` or `member`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<String>,
    /// `created`, `updated`, `pushed` or `full_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Search keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
}
