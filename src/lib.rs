//! # Gitee Integration Library
//!
//! A client for the Gitee v5 REST API with:
//! - Users, SSH keys, followers and namespaces
//! - Organizations and memberships
//! - Open source licenses
//! - Repositories, branches and commits
//! - Page-at-a-time pagination driven by response metadata
//! - Bearer or `access_token` authentication
//! - Request logging through `tracing` and in-process metrics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_gitee::{AuthMethod, GiteeClient, GiteeConfig};
//! use integrations_gitee::services::RepositoryListOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GiteeConfig::builder()
//!         .auth(AuthMethod::access_token("xxxxxxxxxxxx"))
//!         .build()?;
//!
//!     let client = GiteeClient::new(config)?;
//!
//!     // Repositories of the authenticated user
//!     let page = client
//!         .repositories()
//!         .list("", &RepositoryListOptions::default())
//!         .await?;
//!     for repo in &page.items {
//!         println!("{}", repo.full_name.as_deref().unwrap_or_default());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// HTTP client and transport
pub mod client;

// Pagination handling
pub mod pagination;

// API Services
pub mod services;

// Observability
pub mod observability;

// Re-exports for convenience
pub use auth::AuthMethod;
pub use client::{GiteeClient, GiteeClientBuilder};
pub use config::{GiteeConfig, GiteeConfigBuilder};
pub use errors::{ErrorCategory, GiteeError, GiteeErrorKind, GiteeResult};
pub use pagination::{ListOptions, Page, PaginationLinks, Response, ResponseMeta};
pub use types::*;
