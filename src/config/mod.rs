//! Configuration types for the Gitee client.

use crate::auth::AuthMethod;
use crate::errors::{GiteeError, GiteeErrorKind};
use std::time::Duration;

/// Default Gitee API base URL.
pub const DEFAULT_BASE_URL: &str = "https://gitee.com/api/v5/";

/// Environment variable overriding the base URL in [`GiteeConfig::from_env`].
pub const BASE_URL_ENV_VAR: &str = "GITEE_BASE_URL";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-gitee/0.1.0";

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// Gitee client configuration.
#[derive(Debug, Clone)]
pub struct GiteeConfig {
    /// API base URL.
    pub base_url: String,
    /// Authentication method; `None` restricts the client to public endpoints.
    pub auth: Option<AuthMethod>,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Connection pool configuration.
    pub pool: PoolConfig,
}

impl Default for GiteeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl GiteeConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GiteeConfigBuilder {
        GiteeConfigBuilder::new()
    }

    /// Builds a configuration from `GITEE_TOKEN` and `GITEE_BASE_URL`.
    pub fn from_env() -> Result<Self, GiteeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, GiteeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|v| !v.is_empty()) {
            builder = builder.base_url(url);
        }
        if let Some(token) = lookup(crate::auth::TOKEN_ENV_VAR).filter(|v| !v.is_empty()) {
            builder = builder.auth(AuthMethod::access_token(token));
        }
        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GiteeError> {
        if self.base_url.is_empty() {
            return Err(GiteeError::new(
                GiteeErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GiteeError::new(
                GiteeErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        url::Url::parse(&self.base_url).map_err(|e| {
            GiteeError::new(
                GiteeErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            )
            .with_cause(e)
        })?;

        if self.user_agent.is_empty() {
            return Err(GiteeError::configuration("User-Agent cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for GiteeConfig.
#[derive(Debug, Default)]
pub struct GiteeConfigBuilder {
    base_url: Option<String>,
    auth: Option<AuthMethod>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    pool: Option<PoolConfig>,
}

impl GiteeConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<GiteeConfig, GiteeError> {
        let config = GiteeConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            auth: self.auth,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            pool: self.pool.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
