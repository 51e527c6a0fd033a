//! Error types for the outbound API client.
//!
//! [`ClientError`] is returned when an [`ApiClient`](super::ApiClient) rejects
//! its configuration. During app construction it is propagated unchanged inside
//! [`ConfigError::ClientConstruction`](crate::ConfigError::ClientConstruction).
//!
//! # Example
//!
//! ```rust
//! use shopify_app::clients::{ApiClient, ClientConfig, ClientError};
//! use shopify_app::HostUrl;
//!
//! let config = ClientConfig {
//!     host_url: HostUrl::new("ftp://files.example.com").unwrap(),
//!     client_id: "client-id".to_string(),
//! };
//! let result = ApiClient::new(config);
//! assert!(matches!(result, Err(ClientError::UnsupportedScheme { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing an [`ApiClient`](super::ApiClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The host URL does not use `http` or `https`.
    #[error("Unsupported URL scheme '{scheme}'. The app host must use http or https.")]
    UnsupportedScheme {
        /// The scheme that was provided.
        scheme: String,
    },

    /// The host URL has no host component.
    #[error("Host URL '{url}' has no host name")]
    MissingHost {
        /// The URL that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    Build {
        /// The error reported by the HTTP library.
        reason: String,
    },
}
