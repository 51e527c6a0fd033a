//! Verification of the OAuth callback request.

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::hmac::{constant_time_compare, validate_hmac};
use crate::auth::oauth::AuthQuery;
use crate::config::Shop;
use crate::App;

/// A callback that passed every check, ready for code exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCallback {
    /// The trusted shop that authorized the app.
    pub shop: Shop,
    /// The authorization code.
    pub code: String,
}

/// Checks an OAuth callback against the app and the state issued by
/// [`begin_auth`](super::begin_auth).
///
/// Checks run in this order: HMAC signature, state, shop domain, code.
/// Exchanging the code for a token is up to the caller.
///
/// # Errors
///
/// - [`OAuthError::InvalidHmac`] if the signature does not match the client secret
/// - [`OAuthError::StateMismatch`] if the state differs from `expected_state`
/// - [`OAuthError::UntrustedShop`] if the shop is not on a trusted domain
/// - [`OAuthError::InvalidCallback`] if the code is empty
pub fn verify_auth_callback(
    app: &App,
    query: &AuthQuery,
    expected_state: &str,
) -> Result<VerifiedCallback, OAuthError> {
    if !validate_hmac(query, app.config().credentials()) {
        tracing::warn!("Rejected OAuth callback for {} with invalid HMAC", query.shop);
        return Err(OAuthError::InvalidHmac);
    }

    if !constant_time_compare(&query.state, expected_state) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: query.state.clone(),
        });
    }

    let shop = app
        .validate_shop(&query.shop)
        .map_err(|_| OAuthError::UntrustedShop {
            shop: query.shop.clone(),
        })?;

    if query.code.is_empty() {
        return Err(OAuthError::InvalidCallback {
            reason: "authorization code is empty".to_string(),
        });
    }

    Ok(VerifiedCallback {
        shop,
        code: query.code.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::oauth::hmac::compute_signature;
    use crate::{AppConfig, Credentials};

    const SECRET: &str = "callback-secret";

    fn test_app() -> App {
        App::new(
            AppConfig::new("https://myapp.example.com", Credentials::new("key", SECRET)),
            [],
        )
        .unwrap()
    }

    fn signed(code: &str, shop: &str, state: &str) -> AuthQuery {
        let mut query = AuthQuery::new(code, shop, "1700000000", state, None, "");
        query.hmac = compute_signature(&query.to_signable_string(), SECRET);
        query
    }

    #[test]
    fn test_valid_callback_is_accepted() {
        let query = signed("the-code", "shop.myshopify.com", "nonce");
        let verified = verify_auth_callback(&test_app(), &query, "nonce").unwrap();
        assert_eq!(verified.shop.domain(), "shop.myshopify.com");
        assert_eq!(verified.code, "the-code");
    }

    #[test]
    fn test_bad_hmac_is_rejected_first() {
        let mut query = signed("the-code", "shop.evil.com", "wrong");
        query.hmac = "00".repeat(32);
        assert_eq!(
            verify_auth_callback(&test_app(), &query, "nonce"),
            Err(OAuthError::InvalidHmac)
        );
    }

    #[test]
    fn test_state_mismatch() {
        let query = signed("the-code", "shop.myshopify.com", "other");
        assert!(matches!(
            verify_auth_callback(&test_app(), &query, "nonce"),
            Err(OAuthError::StateMismatch { .. })
        ));
    }

    #[test]
    fn test_untrusted_shop() {
        let query = signed("the-code", "shop.evil.com", "nonce");
        assert!(matches!(
            verify_auth_callback(&test_app(), &query, "nonce"),
            Err(OAuthError::UntrustedShop { .. })
        ));
    }

    #[test]
    fn test_empty_code() {
        let query = signed("", "shop.myshopify.com", "nonce");
        assert!(matches!(
            verify_auth_callback(&test_app(), &query, "nonce"),
            Err(OAuthError::InvalidCallback { .. })
        ));
    }
}
