//! Errors raised while starting or verifying an OAuth flow.
//!
//! # Example
//!
//! ```rust
//! use shopify_app::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur in the OAuth helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// The callback's HMAC signature does not match the app's client secret.
    #[error("HMAC signature validation failed")]
    InvalidHmac,

    /// The callback's state does not match the one issued by `begin_auth`.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state issued when the flow began.
        expected: String,
        /// The state received in the callback.
        received: String,
    },

    /// The callback is missing a required parameter.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// What is wrong with the callback.
        reason: String,
    },

    /// The shop is not on a trusted shop domain.
    #[error("Shop '{shop}' is not on a trusted shop domain")]
    UntrustedShop {
        /// The shop that was rejected.
        shop: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hmac_message() {
        assert_eq!(
            OAuthError::InvalidHmac.to_string(),
            "HMAC signature validation failed"
        );
    }

    #[test]
    fn test_untrusted_shop_names_the_shop() {
        let error = OAuthError::UntrustedShop {
            shop: "evil.example.com".to_string(),
        };
        assert!(error.to_string().contains("evil.example.com"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OAuthError>();
    }
}
