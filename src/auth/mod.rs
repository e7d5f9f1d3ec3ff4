//! Authentication for the Gitee API.
//!
//! Gitee accepts a personal access token either as an `access_token` query
//! parameter or as a bearer token in the `Authorization` header.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{GiteeError, GiteeErrorKind, GiteeResult};

/// Name of the query parameter carrying the token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Environment variable read by [`AuthMethod::from_env`].
pub const TOKEN_ENV_VAR: &str = "GITEE_TOKEN";

/// Authentication method for the Gitee API.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// Token sent as `Authorization: Bearer <token>`.
    Bearer(SecretString),
    /// Token sent as the `access_token` query parameter.
    AccessToken(SecretString),
}

impl AuthMethod {
    /// Creates a bearer-token authentication method.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(SecretString::new(token.into()))
    }

    /// Creates a query-token authentication method.
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(SecretString::new(token.into()))
    }

    /// Reads a query token from `GITEE_TOKEN`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .map(Self::access_token)
    }

    /// Label safe to put in logs.
    pub fn redacted(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer ***",
            Self::AccessToken(_) => "access_token ***",
        }
    }

    /// Attaches the credentials to a built request.
    pub fn apply(&self, request: &mut Request) -> GiteeResult<()> {
        match self {
            Self::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|_| {
                        GiteeError::new(
                            GiteeErrorKind::InvalidConfiguration,
                            "Token contains characters not allowed in a header",
                        )
                    })?;
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Self::AccessToken(token) => {
                request
                    .url_mut()
                    .query_pairs_mut()
                    .append_pair(ACCESS_TOKEN_PARAM, token.expose_secret());
            }
        }
        Ok(())
    }
}
