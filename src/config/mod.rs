//! Configuration types for a Shopify app.
//!
//! This module provides the configuration an [`App`](crate::App) is built
//! from and the value types it is made of.
//!
//! # Overview
//!
//! - [`AppConfig`]: The caller-supplied base configuration, frozen inside an app
//! - [`Credentials`]: The client id / secret pair
//! - [`HostUrl`]: A validated application host URL
//! - [`Shop`]: An opaque tenant reference
//! - [`ApiVersion`]: The Admin API version to speak
//! - [`ShopDomainMatcher`]: The trusted shop-domain grammar
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{AppConfig, Credentials};
//!
//! let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
//! assert_eq!(config.host_url(), "https://myapp.example.com");
//! ```

mod newtypes;
mod shop_matcher;
mod version;

pub use newtypes::{Credentials, HostUrl, Shop};
pub use shop_matcher::{ShopDomainMatcher, DEFAULT_SHOP_DOMAINS};
pub use version::ApiVersion;

use crate::auth::Scopes;
use std::fmt;
use std::sync::Arc;

/// Callback run by the install handler after a shop installs the app.
pub type InstallHook = Arc<dyn Fn() + Send + Sync>;

/// Configuration for a Shopify app.
///
/// Callers create an `AppConfig` with [`AppConfig::new`], supplying only the
/// host URL and credentials, and hand it to [`App::new`](crate::App::new).
/// Every other field is set by the app's defaults and options during
/// construction; there is no way to change a field afterwards.
///
/// # Thread Safety
///
/// `AppConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone)]
pub struct AppConfig {
    pub(crate) host_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) api_version: ApiVersion,
    pub(crate) retries: u32,
    pub(crate) embedded: bool,
    pub(crate) auth_begin_path: String,
    pub(crate) auth_callback_path: String,
    pub(crate) auth_callback_url: String,
    pub(crate) bypass_session_id: Option<String>,
    pub(crate) scopes: Scopes,
    pub(crate) install_hook: Option<InstallHook>,
    pub(crate) uninstall_path: Option<String>,
    pub(crate) default_shop: Option<Shop>,
    pub(crate) shop_matcher: ShopDomainMatcher,
}

impl AppConfig {
    /// Creates a base configuration from a host URL and credentials.
    ///
    /// The host URL is validated when the app is built, not here.
    #[must_use]
    pub fn new(host_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host_url: host_url.into(),
            credentials,
            api_version: ApiVersion::default(),
            retries: 0,
            embedded: false,
            auth_begin_path: String::new(),
            auth_callback_path: String::new(),
            auth_callback_url: String::new(),
            bypass_session_id: None,
            scopes: Scopes::default(),
            install_hook: None,
            uninstall_path: None,
            default_shop: None,
            shop_matcher: ShopDomainMatcher::default(),
        }
    }

    /// Returns the externally reachable base URL of the app.
    #[must_use]
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Returns the client credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the retry budget for outbound calls. `0` means no retries.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns whether the app is embedded in the Shopify admin.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the path that starts the OAuth flow.
    #[must_use]
    pub fn auth_begin_path(&self) -> &str {
        &self.auth_begin_path
    }

    /// Returns the path Shopify redirects to after authorization.
    #[must_use]
    pub fn auth_callback_path(&self) -> &str {
        &self.auth_callback_path
    }

    /// Returns the absolute callback URL, derived from the host URL and callback path.
    #[must_use]
    pub fn auth_callback_url(&self) -> &str {
        &self.auth_callback_url
    }

    /// Returns the session id used to skip the OAuth flow, if configured.
    #[must_use]
    pub fn bypass_session_id(&self) -> Option<&str> {
        self.bypass_session_id.as_deref()
    }

    /// Returns the canonical requested scopes.
    #[must_use]
    pub const fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    /// Returns the install hook, if registered.
    #[must_use]
    pub const fn install_hook(&self) -> Option<&InstallHook> {
        self.install_hook.as_ref()
    }

    /// Returns the uninstall webhook path, if registered.
    #[must_use]
    pub fn uninstall_path(&self) -> Option<&str> {
        self.uninstall_path.as_deref()
    }

    /// Returns the shop used when authentication is bypassed, if configured.
    #[must_use]
    pub const fn default_shop(&self) -> Option<&Shop> {
        self.default_shop.as_ref()
    }

    /// Returns the trusted shop-domain matcher.
    #[must_use]
    pub const fn shop_matcher(&self) -> &ShopDomainMatcher {
        &self.shop_matcher
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host_url", &self.host_url)
            .field("credentials", &self.credentials)
            .field("api_version", &self.api_version)
            .field("retries", &self.retries)
            .field("embedded", &self.embedded)
            .field("auth_begin_path", &self.auth_begin_path)
            .field("auth_callback_path", &self.auth_callback_path)
            .field("auth_callback_url", &self.auth_callback_url)
            .field("bypass_session_id", &self.bypass_session_id)
            .field("scopes", &self.scopes)
            .field("install_hook", &self.install_hook.is_some())
            .field("uninstall_path", &self.uninstall_path)
            .field("default_shop", &self.default_shop)
            .field("shop_matcher", &self.shop_matcher.domains())
            .finish()
    }
}

// Verify AppConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppConfig>();
};
