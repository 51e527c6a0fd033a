//! HMAC-SHA256 signatures on OAuth callbacks.
//!
//! Comparisons run in constant time.

use crate::auth::oauth::AuthQuery;
use crate::config::Credentials;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt::Write;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex HMAC-SHA256 of `message` keyed by `secret`.
///
/// # Example
///
/// ```rust
/// use shopify_app::auth::oauth::hmac::compute_signature;
///
/// let signature = compute_signature("code=abc", "secret");
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts keys of any length
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());

    mac.finalize()
        .into_bytes()
        .iter()
        .fold(String::with_capacity(64), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// Compares two strings without short-circuiting on the first difference.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Returns `true` if `query.hmac` is the signature of `query` under the
/// client secret.
#[must_use]
pub fn validate_hmac(query: &AuthQuery, credentials: &Credentials) -> bool {
    let expected = compute_signature(&query.to_signable_string(), credentials.client_secret());
    constant_time_compare(&expected, &query.hmac.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_query(secret: &str) -> AuthQuery {
        let mut query = AuthQuery::new(
            "auth-code",
            "test-shop.myshopify.com",
            "1700000000",
            "state-value",
            None,
            "",
        );
        query.hmac = compute_signature(&query.to_signable_string(), secret);
        query
    }

    #[test]
    fn test_compute_signature_known_vector() {
        // RFC 4231 test case 2
        assert_eq!(
            compute_signature("what do ya want for nothing?", "Jefe"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("short", "longer string"));
        assert!(!constant_time_compare("a", ""));
    }

    #[test]
    fn test_validate_hmac_accepts_correct_signature() {
        let credentials = Credentials::new("id", "test-secret");
        assert!(validate_hmac(&signed_query("test-secret"), &credentials));
    }

    #[test]
    fn test_validate_hmac_accepts_uppercase_hex() {
        let credentials = Credentials::new("id", "test-secret");
        let mut query = signed_query("test-secret");
        query.hmac = query.hmac.to_ascii_uppercase();
        assert!(validate_hmac(&query, &credentials));
    }

    #[test]
    fn test_validate_hmac_rejects_wrong_secret() {
        let credentials = Credentials::new("id", "test-secret");
        assert!(!validate_hmac(&signed_query("other-secret"), &credentials));
    }

    #[test]
    fn test_validate_hmac_rejects_tampered_params() {
        let credentials = Credentials::new("id", "test-secret");
        let mut query = signed_query("test-secret");
        query.shop = "attacker.myshopify.com".to_string();
        assert!(!validate_hmac(&query, &credentials));
    }
}
