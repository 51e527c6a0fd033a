//! Authorization URL generation.

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::App;

/// Where to send the merchant, and the state to remember until the callback.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// Shopify's authorization URL for the shop.
    pub auth_url: String,
    /// State embedded in `auth_url`; pass it to
    /// [`verify_auth_callback`](super::verify_auth_callback) later.
    pub state: StateParam,
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};

/// Starts the OAuth authorization code flow for `shop`.
///
/// The URL requests the app's configured scopes and redirects back to its
/// derived callback URL. Online flows add `grant_options[]=per-user`.
///
/// # Errors
///
/// Returns [`OAuthError::UntrustedShop`] if `shop` is not on a trusted domain.
///
/// # Example
///
/// ```rust
/// use shopify_app::{App, AppConfig, Credentials, with_scopes};
/// use shopify_app::auth::oauth::begin_auth;
///
/// let credentials = Credentials::new("client-id", "secret");
/// let config = AppConfig::new("https://myapp.example.com", credentials);
/// let app = App::new(config, [with_scopes(["write_orders", "read_products"])]).unwrap();
///
/// let result = begin_auth(&app, "test-shop.myshopify.com", false).unwrap();
/// assert!(result
///     .auth_url
///     .starts_with("https://test-shop.myshopify.com/admin/oauth/authorize?client_id=client-id"));
/// assert!(result.auth_url.contains("scope=read_products%2Cwrite_orders"));
/// ```
pub fn begin_auth(app: &App, shop: &str, is_online: bool) -> Result<BeginAuthResult, OAuthError> {
    let shop = app
        .validate_shop(shop)
        .map_err(|_| OAuthError::UntrustedShop {
            shop: shop.to_string(),
        })?;

    let config = app.config();
    let state = StateParam::new();
    let scope = config.scopes().to_string();

    let mut params = vec![
        ("client_id", config.credentials().client_id()),
        ("scope", scope.as_str()),
        ("redirect_uri", config.auth_callback_url()),
        ("state", state.as_str()),
    ];
    if is_online {
        params.push(("grant_options[]", "per-user"));
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    tracing::debug!(
        "Beginning {} OAuth flow for {}",
        if is_online { "online" } else { "offline" },
        shop
    );

    Ok(BeginAuthResult {
        auth_url: format!("https://{shop}/admin/oauth/authorize?{query}"),
        state,
    })
}
