//! Integration tests for the OAuth helpers.
//!
//! These tests drive a full begin/callback round trip against an app.

use shopify_app::auth::oauth::hmac::compute_signature;
use shopify_app::{
    begin_auth, verify_auth_callback, with_auth_callback_endpoint, with_custom_shop_domains,
    with_scopes, App, AppConfig, AuthQuery, Credentials, OAuthError, StateParam,
};

const SECRET: &str = "oauth-secret";

fn test_app() -> App {
    App::new(
        AppConfig::new("https://myapp.example.com", Credentials::new("client-id", SECRET)),
        [
            with_scopes(["write_products", "read_orders"]),
            with_auth_callback_endpoint("/oauth/callback"),
            with_custom_shop_domains(["shops.example.org"]),
        ],
    )
    .unwrap()
}

fn callback_for(shop: &str, state: &StateParam) -> AuthQuery {
    let mut query = AuthQuery::new(
        "auth-code",
        shop,
        "1700000000",
        state.as_str(),
        Some("YWRtaW4uc2hvcGlmeS5jb20=".to_string()),
        "",
    );
    query.hmac = compute_signature(&query.to_signable_string(), SECRET);
    query
}

#[test]
fn test_round_trip_on_custom_domain() {
    let app = test_app();
    let started = begin_auth(&app, "tenant.shops.example.org", true).unwrap();

    assert!(started
        .auth_url
        .starts_with("https://tenant.shops.example.org/admin/oauth/authorize?"));
    assert!(started.auth_url.contains("scope=read_orders%2Cwrite_products"));
    assert!(started
        .auth_url
        .contains("redirect_uri=https%3A%2F%2Fmyapp.example.com%2Foauth%2Fcallback"));

    let query = callback_for("tenant.shops.example.org", &started.state);
    let verified = verify_auth_callback(&app, &query, started.state.as_str()).unwrap();

    assert_eq!(verified.shop.domain(), "tenant.shops.example.org");
    assert_eq!(verified.code, "auth-code");
}

#[test]
fn test_callback_with_state_from_another_flow_is_rejected() {
    let app = test_app();
    let first = begin_auth(&app, "a.myshopify.com", false).unwrap();
    let second = begin_auth(&app, "a.myshopify.com", false).unwrap();

    let query = callback_for("a.myshopify.com", &second.state);
    let result = verify_auth_callback(&app, &query, first.state.as_str());

    assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
}

#[test]
fn test_callback_signed_with_other_secret_is_rejected() {
    let app = test_app();
    let state = StateParam::new();
    let mut query = callback_for("a.myshopify.com", &state);
    query.hmac = compute_signature(&query.to_signable_string(), "not-the-secret");

    assert_eq!(
        verify_auth_callback(&app, &query, state.as_str()),
        Err(OAuthError::InvalidHmac)
    );
}

#[test]
fn test_begin_auth_rejects_untrusted_shop() {
    let result = begin_auth(&test_app(), "tenant.example.com", false);
    assert!(matches!(result, Err(OAuthError::UntrustedShop { .. })));
}
