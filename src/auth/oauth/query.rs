//! Query parameters Shopify sends to the OAuth callback.

use serde::Deserialize;

/// Parameters of an OAuth callback request.
///
/// Deserializes directly from the callback's query string with any web
/// framework's query extractor.
///
/// # Example
///
/// ```rust
/// use shopify_app::auth::oauth::AuthQuery;
///
/// let query = AuthQuery::new("code", "shop.myshopify.com", "1700000000", "nonce", None, "hmac");
/// assert_eq!(
///     query.to_signable_string(),
///     "code=code&shop=shop.myshopify.com&state=nonce&timestamp=1700000000"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthQuery {
    /// Authorization code to exchange for an access token.
    pub code: String,
    /// The shop that authorized the app.
    pub shop: String,
    /// Unix timestamp of the redirect.
    pub timestamp: String,
    /// State issued when the flow began.
    pub state: String,
    /// Base64-encoded admin host, sent for embedded apps.
    #[serde(default)]
    pub host: Option<String>,
    /// Hex HMAC-SHA256 signature over the other parameters.
    pub hmac: String,
}

impl AuthQuery {
    /// Creates a query from its parts.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        shop: impl Into<String>,
        timestamp: impl Into<String>,
        state: impl Into<String>,
        host: Option<String>,
        hmac: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            shop: shop.into(),
            timestamp: timestamp.into(),
            state: state.into(),
            host,
            hmac: hmac.into(),
        }
    }

    /// Returns the message the `hmac` parameter signs.
    ///
    /// Every parameter except `hmac`, as `key=value`, sorted by key and
    /// joined with `&`.
    #[must_use]
    pub fn to_signable_string(&self) -> String {
        let mut pairs = vec![
            ("code", self.code.as_str()),
            ("shop", self.shop.as_str()),
            ("state", self.state.as_str()),
            ("timestamp", self.timestamp.as_str()),
        ];
        if let Some(host) = &self.host {
            pairs.push(("host", host.as_str()));
        }
        pairs.sort_unstable_by_key(|(key, _)| *key);

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
