//! Outbound client handle for the Shopify Admin API.
//!
//! This module provides [`ApiClient`], the handle an [`App`](crate::App)
//! creates once at construction and keeps for its whole lifetime. It owns the
//! connection-pooling HTTP client and knows how to address a shop's Admin API.
//! Executing requests, and retrying them, is left to the caller.

use crate::clients::errors::ClientError;
use crate::config::{ApiVersion, HostUrl, Shop};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parameters an [`ApiClient`] is bound to.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The app's externally reachable host URL.
    pub host_url: HostUrl,
    /// The app's client id.
    pub client_id: String,
}

/// Handle for calling the Shopify Admin API on behalf of an app.
///
/// Cloning is cheap; clones share the same connection pool.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use shopify_app::clients::{ApiClient, ClientConfig};
/// use shopify_app::{ApiVersion, HostUrl, Shop};
///
/// let client = ApiClient::new(ClientConfig {
///     host_url: HostUrl::new("https://myapp.example.com").unwrap(),
///     client_id: "client-id".to_string(),
/// })
/// .unwrap();
///
/// let shop = Shop::new("my-store.myshopify.com").unwrap();
/// assert_eq!(
///     client.admin_api_url(&shop, ApiVersion::V2023_07, "products.json"),
///     "https://my-store.myshopify.com/admin/api/2023-07/products.json"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    host_url: HostUrl,
    client_id: String,
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client bound to the app's host URL and client id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedScheme`] if the host URL is not
    /// `http`/`https`, [`ClientError::MissingHost`] if it has no host, and
    /// [`ClientError::Build`] if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let ClientConfig {
            host_url,
            client_id,
        } = config;

        let scheme = host_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ClientError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }

        if host_url.host_name().map_or(true, str::is_empty) {
            return Err(ClientError::MissingHost {
                url: host_url.to_string(),
            });
        }

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Shopify App Library v{SDK_VERSION} | Rust {rust_version}");

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.clone())
            .build()
            .map_err(|e| ClientError::Build {
                reason: e.to_string(),
            })?;

        tracing::debug!("Created API client for host {}", host_url);

        Ok(Self {
            http,
            host_url,
            client_id,
            user_agent,
        })
    }

    /// Returns the host URL this client is bound to.
    #[must_use]
    pub const fn host_url(&self) -> &HostUrl {
        &self.host_url
    }

    /// Returns the client id this client is bound to.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the Admin API URL for `path` on `shop` at `version`.
    ///
    /// Leading `/` characters on `path` are ignored.
    #[must_use]
    pub fn admin_api_url(&self, shop: &Shop, version: ApiVersion, path: &str) -> String {
        format!(
            "https://{}/admin/api/{}/{}",
            shop.domain().trim_end_matches('/'),
            version,
            path.trim_start_matches('/')
        )
    }

    /// Returns the Admin GraphQL endpoint for `shop` at `version`.
    #[must_use]
    pub fn graphql_url(&self, shop: &Shop, version: ApiVersion) -> String {
        self.admin_api_url(shop, version, "graphql.json")
    }
}
