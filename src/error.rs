//! Error types for Shopify app configuration.
//!
//! This module contains the error type returned while constructing an
//! [`App`](crate::App) and while parsing the validated values it is built from.
//!
//! # Error Handling
//!
//! Construction is all-or-nothing: every variant below aborts
//! [`App::new`](crate::App::new) and no partially configured app escapes.
//! An unrecognised API version is not represented here; it
//! resolves to [`ApiVersion::Latest`](crate::ApiVersion::Latest) instead.
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{App, AppConfig, ConfigError, Credentials};
//!
//! let config = AppConfig::new("not a url", Credentials::new("id", "secret"));
//! let result = App::new(config, []);
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use crate::clients::ClientError;
use thiserror::Error;

/// Errors that can occur while configuring a Shopify app.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL could not be parsed as an absolute URL.
    #[error("Invalid host URL '{url}': {reason}. Please provide a valid URL with scheme (e.g., 'https://myapp.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The outbound API client rejected its configuration.
    #[error("Failed to construct API client: {0}")]
    ClientConstruction(#[from] ClientError),

    /// The auth callback URL could not be derived from the host URL and path.
    #[error("Cannot derive auth callback URL from host '{host}' and path '{path}': {reason}")]
    CallbackUrlDerivation {
        /// The host URL in effect when the derivation ran.
        host: String,
        /// The callback path that was being joined.
        path: String,
        /// Why the join failed.
        reason: String,
    },

    /// Trusted shop domains produced an invalid matching grammar.
    #[error("Invalid trusted shop domains: {reason}")]
    DomainPatternCompilation {
        /// The reason the pattern could not be built.
        reason: String,
    },

    /// Shop domain is not accepted.
    #[error("Invalid shop domain '{domain}'. Expected format: '<shop>.myshopify.com' or another trusted domain.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host_url_error_message() {
        let error = ConfigError::InvalidHostUrl {
            url: "bad url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad url"));
        assert!(message.contains("relative URL without a base"));
        assert!(message.contains("valid URL with scheme"));
    }

    #[test]
    fn test_client_construction_wraps_client_error() {
        let error: ConfigError = ClientError::UnsupportedScheme {
            scheme: "ftp".to_string(),
        }
        .into();
        assert!(matches!(error, ConfigError::ClientConstruction(_)));
        assert!(error.to_string().contains("ftp"));
    }

    #[test]
    fn test_callback_url_derivation_error_message() {
        let error = ConfigError::CallbackUrlDerivation {
            host: "https://app.example.com".to_string(),
            path: "/cb%zz".to_string(),
            reason: "path contains an invalid percent-escape".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("https://app.example.com"));
        assert!(message.contains("/cb%zz"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::DomainPatternCompilation {
            reason: "empty domain".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
