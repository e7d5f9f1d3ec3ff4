//! License operations.

use super::require;
use crate::client::GiteeClient;
use crate::errors::GiteeResult;
use crate::pagination::Response;
use crate::types::{License, RepositoryLicense};
use reqwest::Method;

/// Service for license operations.
pub struct LicensesService<'a> {
    client: &'a GiteeClient,
}

impl<'a> LicensesService<'a> {
    /// Creates a new licenses service.
    pub fn new(client: &'a GiteeClient) -> Self {
        Self { client }
    }

    /// Gets the license detected for a repository.
    pub async fn repository_license(
        &self,
        owner: &str,
        repo: &str,
    ) -> GiteeResult<Response<RepositoryLicense>> {
        let owner = require("owner", owner)?;
        let repo = require("repo", repo)?;
        self.client
            .get(&format!("repos/{}/{}/license", owner, repo))
            .await
    }

    /// Lists the identifiers of all open source license templates.
    pub async fn list(&self) -> GiteeResult<Response<Vec<String>>> {
        self.client.get("licenses").await
    }

    /// Gets a license template.
    pub async fn get(&self, license: &str) -> GiteeResult<Response<License>> {
        let license = require("license", license)?;
        self.client.get(&format!("licenses/{}", license)).await
    }

    /// Gets the raw text of a license template, byte for byte.
    pub async fn get_raw(&self, license: &str) -> GiteeResult<Response<String>> {
        let license = require("license", license)?;
        let request =
            self.client
                .new_request(Method::GET, &format!("licenses/{}/raw", license), None::<&()>)?;
        self.client.execute_text(request).await
    }
}
