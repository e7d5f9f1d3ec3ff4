//! User operations.

use super::{require, user_path};
use crate::client::GiteeClient;
use crate::errors::GiteeResult;
use crate::pagination::{ListOptions, Page, Response, ResponseMeta};
use crate::types::{BasicUser, Namespace, SshKey, User};
use serde::{Deserialize, Serialize};

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a GiteeClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new users service.
    pub fn new(client: &'a GiteeClient) -> Self {
        Self { client }
    }

    /// Gets `user`, or the authenticated user when `user` is empty.
    pub async fn get(&self, user: &str) -> GiteeResult<Response<User>> {
        let path = user_path(user, "user", |u| format!("users/{}", u))?;
        self.client.get(&path).await
    }

    /// Updates the authenticated user.
    pub async fn edit(&self, request: &UserEditRequest) -> GiteeResult<Response<User>> {
        self.client.patch("user", request).await
    }

    // SSH keys

    /// Lists public keys of `user`, or of the authenticated user when empty.
    pub async fn list_keys(&self, user: &str, opts: &ListOptions) -> GiteeResult<Page<SshKey>> {
        let path = user_path(user, "user/keys", |u| format!("users/{}/keys", u))?;
        self.client.get_page(&path, opts).await
    }

    /// Adds a public key for the authenticated user.
    pub async fn create_key(&self, request: &KeyCreateRequest) -> GiteeResult<Response<SshKey>> {
        self.client.post("user/keys", request).await
    }

    /// Gets one of the authenticated user's public keys.
    pub async fn get_key(&self, id: i64) -> GiteeResult<Response<SshKey>> {
        self.client.get(&format!("user/keys/{}", id)).await
    }

    /// Deletes one of the authenticated user's public keys.
    pub async fn delete_key(&self, id: i64) -> GiteeResult<ResponseMeta> {
        self.client.delete(&format!("user/keys/{}", id)).await
    }

    // Followers

    /// Lists followers of `user`, or of the authenticated user when empty.
    pub async fn list_followers(
        &self,
        user: &str,
        opts: &ListOptions,
    ) -> GiteeResult<Page<BasicUser>> {
        let path = user_path(user, "user/followers", |u| format!("users/{}/followers", u))?;
        self.client.get_page(&path, opts).await
    }

    /// Lists users followed by `user`, or by the authenticated user when empty.
    pub async fn list_following(
        &self,
        user: &str,
        opts: &ListOptions,
    ) -> GiteeResult<Page<BasicUser>> {
        let path = user_path(user, "user/following", |u| format!("users/{}/following", u))?;
        self.client.get_page(&path, opts).await
    }

    /// Checks whether `user` (the authenticated user when empty) follows `target`.
    ///
    /// A 404 answer means "not following" and is not an error.
    pub async fn is_following(&self, user: &str, target: &str) -> GiteeResult<bool> {
        let target = require("target", target)?;
        let path = user_path(user, &format!("user/following/{}", target), |u| {
            format!("users/{}/following/{}", u, target)
        })?;

        let request = self
            .client
            .new_request(reqwest::Method::GET, &path, None::<&()>)?;
        match self.client.execute_empty(request).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Follows `user` as the authenticated user.
    pub async fn follow(&self, user: &str) -> GiteeResult<ResponseMeta> {
        let user = require("user", user)?;
        self.client
            .put_empty(&format!("user/following/{}", user))
            .await
    }

    /// Unfollows `user` as the authenticated user.
    pub async fn unfollow(&self, user: &str) -> GiteeResult<ResponseMeta> {
        let user = require("user", user)?;
        self.client
            .delete(&format!("user/following/{}", user))
            .await
    }

    // Namespaces

    /// Lists namespaces of the authenticated user.
    pub async fn list_namespaces(
        &self,
        opts: &NamespacesOptions,
    ) -> GiteeResult<Response<Vec<Namespace>>> {
        self.client.get_with_options("user/namespaces", opts).await
    }

    /// Gets a namespace of the authenticated user by path.
    pub async fn get_namespace(&self, opts: &NamespaceOptions) -> GiteeResult<Response<Namespace>> {
        self.client.get_with_options("user/namespace", opts).await
    }
}

/// Request to update the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEditRequest {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Blog address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Weibo link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,
    /// Self introduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Request to add a public key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyCreateRequest {
    /// Public key content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Key title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Filter for [`UsersService::list_namespaces`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespacesOptions {
    /// `project` (namespaces the user has repositories in), `intrant`
    /// (namespaces the user joined) or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Selector for [`UsersService::get_namespace`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceOptions {
    /// Namespace path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_options_query() {
        let opts = NamespacesOptions {
            mode: Some("intrant".to_string()),
        };
        assert_eq!(
            GiteeClient::add_options("user/namespaces", &opts).unwrap(),
            "user/namespaces?mode=intrant"
        );
        assert_eq!(
            GiteeClient::add_options("user/namespaces", &NamespacesOptions::default()).unwrap(),
            "user/namespaces"
        );
    }

    #[test]
    fn test_user_edit_request_keeps_empty_strings() {
        let request = UserEditRequest {
            bio: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"bio":""}"#);
    }
}
