//! The configured Shopify app.
//!
//! [`App`] ties together the frozen [`AppConfig`], the outbound
//! [`ApiClient`], and the [`SessionStore`] that request handling depends on.
//!
//! # Construction
//!
//! [`App::new`] runs a fixed sequence and either returns a complete app or
//! an error; nothing partially configured escapes:
//!
//! 1. Parse the host URL ([`ConfigError::InvalidHostUrl`])
//! 2. Create the API client ([`ConfigError::ClientConstruction`])
//! 3. Apply defaults: latest API version, embedded, `/auth/begin`,
//!    `/auth/install`, the derived callback URL, an in-memory session store,
//!    and the default shop-domain matcher
//! 4. Apply each [`AppOption`] in order
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{
//!     App, AppConfig, ApiVersion, Credentials, with_auth_callback_endpoint, with_retry,
//!     with_scopes, with_version,
//! };
//!
//! let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
//! let app = App::new(
//!     config,
//!     [
//!         with_version(ApiVersion::V2023_07),
//!         with_retry(3),
//!         with_scopes(["write_orders", "read_products"]),
//!         with_auth_callback_endpoint("/auth/callback"),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(app.config().api_version(), ApiVersion::V2023_07);
//! assert_eq!(app.config().retries(), 3);
//! assert_eq!(app.config().auth_callback_url(), "https://myapp.example.com/auth/callback");
//! ```

mod options;

pub use options::{
    bypass_auth_with_session_id, with_auth_begin_endpoint, with_auth_callback_endpoint,
    with_custom_shop_domains, with_default_auth, with_install_hook, with_is_embedded, with_retry,
    with_scopes, with_session_store, with_uninstall_hook, with_version, AppOption,
};

use crate::auth::{InMemorySessionStore, SessionStore};
use crate::clients::{ApiClient, ClientConfig};
use crate::config::{ApiVersion, AppConfig, HostUrl, Shop, ShopDomainMatcher};
use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

/// Path that starts the OAuth flow unless overridden.
pub const DEFAULT_AUTH_BEGIN_PATH: &str = "/auth/begin";

/// Path Shopify redirects to after authorization unless overridden.
pub const DEFAULT_AUTH_CALLBACK_PATH: &str = "/auth/install";

/// The in-progress app that options mutate.
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) host_url: HostUrl,
    pub(crate) session_store: Arc<dyn SessionStore>,
}

impl AppState {
    fn with_defaults(mut config: AppConfig, host_url: HostUrl) -> Result<Self, ConfigError> {
        config.api_version = ApiVersion::Latest;
        config.embedded = true;
        config.auth_begin_path = DEFAULT_AUTH_BEGIN_PATH.to_string();
        config.auth_callback_path = DEFAULT_AUTH_CALLBACK_PATH.to_string();
        config.auth_callback_url = host_url.join_path(&config.auth_callback_path)?;
        let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        config.shop_matcher = ShopDomainMatcher::default();

        Ok(Self {
            config,
            host_url,
            session_store,
        })
    }
}

/// A configured Shopify app.
///
/// An `App` is built once at startup and shared, read-only, by every request
/// handler for the rest of the process. Nothing about it changes after
/// [`App::new`] returns.
///
/// # Thread Safety
///
/// `App` is `Send + Sync`; wrap it in an `Arc` to share it across tasks.
pub struct App {
    config: AppConfig,
    client: ApiClient,
    session_store: Arc<dyn SessionStore>,
}

// Verify App is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<App>();
};

impl App {
    /// Builds an app from a base configuration and an ordered list of options.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidHostUrl`] if the host URL does not parse
    /// - [`ConfigError::ClientConstruction`] if the API client rejects it
    /// - [`ConfigError::CallbackUrlDerivation`] if a callback URL cannot be derived
    /// - [`ConfigError::DomainPatternCompilation`] if custom shop domains are malformed
    pub fn new<I>(config: AppConfig, options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = AppOption>,
    {
        let host_url = HostUrl::new(&config.host_url)?;

        let client = ApiClient::new(ClientConfig {
            host_url: host_url.clone(),
            client_id: config.credentials.client_id().to_string(),
        })?;

        if !config.credentials.is_complete() {
            tracing::warn!(
                "Building app for {} with incomplete credentials; API calls will fail",
                host_url
            );
        }

        let mut state = AppState::with_defaults(config, host_url)?;

        let mut applied = 0_usize;
        for option in options {
            option.apply(&mut state)?;
            applied += 1;
        }

        tracing::debug!(
            "Built app for {} with {} option(s), API version {}",
            state.host_url,
            applied,
            state.config.api_version
        );

        Ok(Self {
            config: state.config,
            client,
            session_store: state.session_store,
        })
    }

    /// Creates a fluent builder collecting options for [`App::new`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_app::{App, AppConfig, Credentials, with_is_embedded, with_retry};
    ///
    /// let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
    /// let app = App::builder(config)
    ///     .option(with_is_embedded(false))
    ///     .option(with_retry(2))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(!app.config().is_embedded());
    /// ```
    #[must_use]
    pub fn builder(config: AppConfig) -> AppBuilder {
        AppBuilder {
            config,
            options: Vec::new(),
        }
    }

    /// Returns the frozen configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the outbound API client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the session store.
    #[must_use]
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Returns a shared handle to the session store.
    #[must_use]
    pub fn session_store_handle(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.session_store)
    }

    /// Accepts `candidate` as a [`Shop`] if it belongs to a trusted domain.
    ///
    /// Trailing `/` characters tolerated by the matcher are dropped from the
    /// returned shop.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the shop-domain matcher
    /// rejects `candidate`.
    pub fn validate_shop(&self, candidate: &str) -> Result<Shop, ConfigError> {
        if !self.config.shop_matcher.matches(candidate) {
            return Err(ConfigError::InvalidShopDomain {
                domain: candidate.to_string(),
            });
        }
        Shop::new(candidate.trim_end_matches('/'))
    }

    /// Runs the install hook, returning `false` if none is registered.
    pub fn run_install_hook(&self) -> bool {
        self.config.install_hook.as_ref().map_or(false, |hook| {
            hook();
            true
        })
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Fluent builder collecting [`AppOption`]s for [`App::new`].
///
/// Options are applied in the order they were added.
#[derive(Debug)]
pub struct AppBuilder {
    config: AppConfig,
    options: Vec<AppOption>,
}

impl AppBuilder {
    /// Appends an option.
    #[must_use]
    pub fn option(mut self, option: AppOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several options, preserving their order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = AppOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Builds the [`App`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`App::new`].
    pub fn build(self) -> Result<App, ConfigError> {
        App::new(self.config, self.options)
    }
}
