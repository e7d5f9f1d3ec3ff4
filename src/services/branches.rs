//! Branch operations.

use super::{require, require_ref};
use super::RepositoriesService;
use crate::errors::GiteeResult;
use crate::pagination::Response;
use crate::types::Branch;

impl<'a> RepositoriesService<'a> {
    /// Lists all branches of a repository.
    ///
    /// Gitee returns the full list in one response; only `commit.sha` and
    /// `commit.url` are filled in on each branch.
    pub async fn list_branches(&self, owner: &str, repo: &str) -> GiteeResult<Response<Vec<Branch>>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        self.client
            .get(&format!("repos/{}/{}/branches", owner, repo))
            .await
    }

    /// Gets a branch.
    pub async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> GiteeResult<Response<Branch>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        let branch = require_ref("branch", branch)?;
        self.client
            .get(&format!("repos/{}/{}/branches/{}", owner, repo, branch))
            .await
    }
}
