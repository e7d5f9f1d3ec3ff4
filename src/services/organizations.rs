//! Organization operations.

use super::{require, user_path};
use crate::client::GiteeClient;
use crate::errors::GiteeResult;
use crate::pagination::{ListOptions, Page, Response};
use crate::types::{Membership, Organization};
use serde::{Deserialize, Serialize};

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    client: &'a GiteeClient,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(client: &'a GiteeClient) -> Self {
        Self { client }
    }

    /// Lists organizations of `user`, or of the authenticated user when
    /// `user` is empty.
    pub async fn list(
        &self,
        user: &str,
        opts: &OrganizationListOptions,
    ) -> GiteeResult<Page<Organization>> {
        let path = user_path(user, "user/orgs", |u| format!("users/{}/orgs", u))?;
        self.client.get_page(&path, opts).await
    }

    /// Lists the authenticated user's organization memberships.
    pub async fn list_memberships(
        &self,
        opts: &MembershipListOptions,
    ) -> GiteeResult<Page<Membership>> {
        self.client.get_page("user/memberships/orgs", opts).await
    }

    /// Gets a membership in `org`.
    ///
    /// An empty `user` means the authenticated user; otherwise the named
    /// user's membership is fetched.
    pub async fn get_membership(&self, user: &str, org: &str) -> GiteeResult<Response<Membership>> {
        let org = require("org", org)?;
        let path = user_path(user, &format!("user/memberships/orgs/{}", org), |u| {
            format!("orgs/{}/memberships/{}", org, u)
        })?;
        self.client.get(&path).await
    }

    /// Updates the authenticated user's membership in `org`.
    pub async fn edit_membership(
        &self,
        org: &str,
        request: &MembershipEditRequest,
    ) -> GiteeResult<Response<Membership>> {
        let org = require("org", org)?;
        self.client
            .patch(&format!("user/memberships/orgs/{}", org), request)
            .await
    }
}

/// Options for listing organizations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationListOptions {
    /// Only organizations the user administers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Options for listing memberships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipListOptions {
    /// Only active (`true`) or pending (`false`) memberships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Request to update a membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipEditRequest {
    /// Remark shown for the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GiteeClient;

    #[test]
    fn test_organization_list_options_query() {
        let opts = OrganizationListOptions {
            admin: Some(true),
            list: ListOptions::new().page(2),
        };
        assert_eq!(
            GiteeClient::add_options("user/orgs", &opts).unwrap(),
            "user/orgs?admin=true&page=2"
        );
    }

    #[test]
    fn test_membership_edit_request_omits_absent() {
        let request = MembershipEditRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }
}
