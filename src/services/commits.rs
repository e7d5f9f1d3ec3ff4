//! Commit operations.

use super::{require, require_ref};
use super::RepositoriesService;
use crate::errors::GiteeResult;
use crate::pagination::{ListOptions, Page, Response};
use crate::types::{RepositoryCommit, Timestamp};
use serde::{Deserialize, Serialize};

impl<'a> RepositoriesService<'a> {
    /// Lists commits of a repository.
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        opts: &CommitsListOptions,
    ) -> GiteeResult<Page<RepositoryCommit>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        self.client
            .get_page(&format!("repos/{}/{}/commits", owner, repo), opts)
            .await
    }

    /// Gets a single commit, including stats and changed files.
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> GiteeResult<Response<RepositoryCommit>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        let sha = require_ref("sha", sha)?;
        self.client
            .get(&format!("repos/{}/{}/commits/{}", owner, repo, sha))
            .await
    }
}

/// Options for listing commits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitsListOptions {
    /// Starting SHA or branch name; defaults to the default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Only commits touching this file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Only commits by this author (login or email).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Only commits after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<Timestamp>,
    /// Only commits before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<Timestamp>,
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GiteeClient;
    use chrono::DateTime;

    #[test]
    fn test_commits_list_options_query() {
        let opts = CommitsListOptions {
            sha: Some("main".to_string()),
            since: Some(DateTime::parse_from_rfc3339("2022-01-01T00:00:00+08:00").unwrap()),
            list: ListOptions::new().page(2).per_page(50),
            ..Default::default()
        };
        assert_eq!(
            GiteeClient::add_options("repos/o/r/commits", &opts).unwrap(),
            "repos/o/r/commits?sha=main&since=2022-01-01T00%3A00%3A00%2B08%3A00&page=2&per_page=50"
        );
    }
}
