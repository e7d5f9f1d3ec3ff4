//! Gitee API client implementation.

use crate::auth::AuthMethod;
use crate::config::{GiteeConfig, GiteeConfigBuilder};
use crate::errors::{GiteeError, GiteeErrorKind, GiteeResult};
use crate::observability::{Metrics, MetricsSnapshot, RequestTimer, TracingHooks};
use crate::pagination::{Page, Response, ResponseMeta};
use crate::services::*;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use url::Url;

/// Gitee API client.
///
/// Cloning is cheap; clones share the connection pool and metrics.
#[derive(Debug, Clone)]
pub struct GiteeClient {
    /// HTTP client.
    http: Client,
    /// Configuration.
    config: Arc<GiteeConfig>,
    /// Base URL, always ending with `/`.
    base_url: Url,
    /// Request metrics.
    metrics: Arc<Metrics>,
}

impl GiteeClient {
    /// Creates a new Gitee client.
    pub fn new(config: GiteeConfig) -> GiteeResult<Self> {
        config.validate()?;

        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            GiteeError::new(
                GiteeErrorKind::InvalidBaseUrl,
                format!("Invalid base URL: {}", e),
            )
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                GiteeError::new(
                    GiteeErrorKind::InvalidConfiguration,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        TracingHooks::on_client_created(&base_url, config.auth.as_ref());

        Ok(Self {
            http,
            config: Arc::new(config),
            base_url,
            metrics: Arc::new(Metrics::new()),
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> GiteeClientBuilder {
        GiteeClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets a snapshot of the request metrics.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // Service accessors

    /// Gets the users service.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    /// Gets the licenses service.
    pub fn licenses(&self) -> LicensesService<'_> {
        LicensesService::new(self)
    }

    /// Gets the repositories service (also covers branches and commits).
    pub fn repositories(&self) -> RepositoriesService<'_> {
        RepositoriesService::new(self)
    }

    // Request construction

    /// Builds a request for `path`, relative to the base URL.
    ///
    /// The body, when given, is sent as JSON. Credentials from the
    /// configuration are attached.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> GiteeResult<Request> {
        let url = self.build_url(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str());

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                GiteeError::invalid_parameter(format!("Failed to serialize request body: {}", e))
                    .with_cause(e)
            })?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let mut request = builder.build()?;
        if let Some(auth) = &self.config.auth {
            auth.apply(&mut request)?;
        }
        Ok(request)
    }

    /// Appends the URL-encoded form of `opts` to `path`.
    ///
    /// Fields serialized as absent are left out; the path is returned
    /// untouched when nothing is set.
    pub fn add_options<O: Serialize + ?Sized>(path: &str, opts: &O) -> GiteeResult<String> {
        let query = serde_urlencoded::to_string(opts).map_err(|e| {
            GiteeError::invalid_parameter(format!("Failed to serialize parameters: {}", e))
                .with_cause(e)
        })?;

        Ok(if query.is_empty() {
            path.to_string()
        } else if path.contains('?') {
            format!("{}&{}", path, query)
        } else {
            format!("{}?{}", path, query)
        })
    }

    // Execution

    /// Executes a request and decodes the JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> GiteeResult<Response<T>> {
        let (meta, body) = self.send(request).await?;

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Response::new(value, meta)),
            Err(e) => Err(GiteeError::deserialization(format!(
                "Failed to deserialize response: {}",
                e
            ))
            .with_status(meta.status)
            .with_response(meta)
            .with_cause(e)),
        }
    }

    /// Executes a request and returns the body bytes verbatim.
    pub async fn execute_raw(&self, request: Request) -> GiteeResult<Response<Bytes>> {
        let (meta, body) = self.send(request).await?;
        Ok(Response::new(body, meta))
    }

    /// Executes a request and returns the body as UTF-8 text, verbatim.
    pub async fn execute_text(&self, request: Request) -> GiteeResult<Response<String>> {
        let (meta, body) = self.send(request).await?;

        match String::from_utf8(body.to_vec()) {
            Ok(text) => Ok(Response::new(text, meta)),
            Err(e) => Err(GiteeError::deserialization("Response body is not valid UTF-8")
                .with_status(meta.status)
                .with_response(meta)
                .with_cause(e)),
        }
    }

    /// Executes a request and discards the body.
    pub async fn execute_empty(&self, request: Request) -> GiteeResult<ResponseMeta> {
        let (meta, _) = self.send(request).await?;
        Ok(meta)
    }

    // HTTP helpers

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GiteeResult<Response<T>> {
        let request = self.new_request(Method::GET, path, None::<&()>)?;
        self.execute(request).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_options<T: DeserializeOwned, O: Serialize + ?Sized>(
        &self,
        path: &str,
        opts: &O,
    ) -> GiteeResult<Response<T>> {
        let path = Self::add_options(path, opts)?;
        self.get(&path).await
    }

    /// Makes a paginated GET request.
    pub async fn get_page<T: DeserializeOwned, O: Serialize + ?Sized>(
        &self,
        path: &str,
        opts: &O,
    ) -> GiteeResult<Page<T>> {
        self.get_with_options::<Vec<T>, O>(path, opts)
            .await
            .map(Page::from)
    }

    /// Makes a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GiteeResult<Response<T>> {
        let request = self.new_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    /// Makes a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GiteeResult<Response<T>> {
        let request = self.new_request(Method::PATCH, path, Some(body))?;
        self.execute(request).await
    }

    /// Makes a PUT request without a body, discarding the response body.
    pub async fn put_empty(&self, path: &str) -> GiteeResult<ResponseMeta> {
        let request = self.new_request(Method::PUT, path, None::<&()>)?;
        self.execute_empty(request).await
    }

    /// Makes a DELETE request, discarding the response body.
    pub async fn delete(&self, path: &str) -> GiteeResult<ResponseMeta> {
        let request = self.new_request(Method::DELETE, path, None::<&()>)?;
        self.execute_empty(request).await
    }

    // Internal methods

    async fn send(&self, request: Request) -> GiteeResult<(ResponseMeta, Bytes)> {
        let method = request.method().to_string();
        let url = request.url().clone();

        TracingHooks::on_request_start(&method, &url);
        let timer = RequestTimer::new(self.metrics.clone());

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                timer.failure();
                let error = GiteeError::from(e);
                TracingHooks::on_request_error(&method, &url, &error.to_string());
                return Err(error);
            }
        };

        let status = response.status();
        let meta = ResponseMeta::new(status.as_u16(), response.headers().clone(), &url);

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                timer.failure();
                let error = GiteeError::from(e).with_status(meta.status).with_response(meta);
                TracingHooks::on_request_error(&method, &url, &error.to_string());
                return Err(error);
            }
        };

        if !status.is_success() {
            timer.failure();
            let error = GiteeError::from_response(status.as_u16(), &body, meta);
            TracingHooks::on_request_error(&method, &url, &error.to_string());
            return Err(error);
        }

        let duration = timer.success();
        TracingHooks::on_request_complete(&method, &url, status.as_u16(), duration);
        Ok((meta, body))
    }

    fn build_url(&self, path: &str) -> GiteeResult<Url> {
        let path = path.trim_start_matches('/');
        self.base_url.join(path).map_err(|e| {
            GiteeError::invalid_parameter(format!("Invalid request path `{}`: {}", path, e))
                .with_cause(e)
        })
    }
}

/// Builder for GiteeClient.
pub struct GiteeClientBuilder {
    config_builder: GiteeConfigBuilder,
}

impl GiteeClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: GiteeConfig::builder(),
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.config_builder = self.config_builder.auth(auth);
        self
    }

    /// Authenticates with a bearer token.
    pub fn bearer(self, token: impl Into<String>) -> Self {
        self.auth(AuthMethod::bearer(token))
    }

    /// Authenticates with an `access_token` query parameter.
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.auth(AuthMethod::access_token(token))
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Builds the client.
    pub fn build(self) -> GiteeResult<GiteeClient> {
        let config = self.config_builder.build()?;
        GiteeClient::new(config)
    }
}

impl Default for GiteeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
