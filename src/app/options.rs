//! Functional options applied while an [`App`](super::App) is constructed.
//!
//! Each function here returns an [`AppOption`]: a single mutation of the
//! in-progress app. Options run after the defaults, strictly in the order
//! they were supplied, and a later option overwrites whatever an earlier one
//! (or a default) set.

use super::AppState;
use crate::auth::{Scopes, SessionStore};
use crate::config::{ApiVersion, ShopDomainMatcher, Shop};
use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

type Mutation = Box<dyn FnOnce(&mut AppState) -> Result<(), ConfigError> + Send>;

/// A single configuration step applied during [`App::new`](super::App::new).
///
/// Create options with the `with_*` functions in this module.
pub struct AppOption(Mutation);

impl AppOption {
    fn set(mutation: impl FnOnce(&mut AppState) + Send + 'static) -> Self {
        Self(Box::new(move |state| {
            mutation(state);
            Ok(())
        }))
    }

    fn try_set(
        mutation: impl FnOnce(&mut AppState) -> Result<(), ConfigError> + Send + 'static,
    ) -> Self {
        Self(Box::new(mutation))
    }

    pub(crate) fn apply(self, state: &mut AppState) -> Result<(), ConfigError> {
        (self.0)(state)
    }
}

impl fmt::Debug for AppOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppOption(..)")
    }
}

/// Sets the API version.
///
/// Accepts an [`ApiVersion`] or a version token; unrecognised tokens resolve
/// to [`ApiVersion::Latest`].
///
/// # Example
///
/// ```rust
/// use shopify_app::{App, AppConfig, ApiVersion, Credentials, with_version};
///
/// let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
/// let app = App::new(config, [with_version("1999-01")]).unwrap();
/// assert_eq!(app.config().api_version(), ApiVersion::Latest);
/// ```
pub fn with_version(version: impl Into<ApiVersion>) -> AppOption {
    let version = version.into();
    AppOption::set(move |state| state.config.api_version = version)
}

/// Sets the retry budget for outbound calls.
pub fn with_retry(retries: u32) -> AppOption {
    AppOption::set(move |state| state.config.retries = retries)
}

/// Sets the shop used when authentication is bypassed.
pub fn with_default_auth(shop: Shop) -> AppOption {
    AppOption::set(move |state| state.config.default_shop = Some(shop))
}

/// Sets the requested OAuth scopes, canonicalized by sorting.
///
/// Replaces any scopes set by an earlier call.
///
/// # Example
///
/// ```rust
/// use shopify_app::{App, AppConfig, Credentials, with_scopes};
///
/// let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
/// let app = App::new(config, [with_scopes(["write_orders", "read_products"])]).unwrap();
/// assert_eq!(app.config().scopes().to_string(), "read_products,write_orders");
/// ```
pub fn with_scopes<I, S>(scopes: I) -> AppOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
    AppOption::set(move |state| state.config.scopes = Scopes::new(scopes))
}

/// Sets the path that starts the OAuth flow.
pub fn with_auth_begin_endpoint(path: impl Into<String>) -> AppOption {
    let path = path.into();
    AppOption::set(move |state| state.config.auth_begin_path = path)
}

/// Sets the OAuth callback path and re-derives the callback URL from the host URL.
///
/// A callback URL that cannot be derived fails construction with
/// [`ConfigError::CallbackUrlDerivation`].
///
/// # Example
///
/// ```rust
/// use shopify_app::{App, AppConfig, Credentials, with_auth_callback_endpoint};
///
/// let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
/// let app = App::new(config, [with_auth_callback_endpoint("/custom/cb")]).unwrap();
/// assert_eq!(app.config().auth_callback_url(), "https://myapp.example.com/custom/cb");
/// ```
pub fn with_auth_callback_endpoint(path: impl Into<String>) -> AppOption {
    let path = path.into();
    AppOption::try_set(move |state| {
        state.config.auth_callback_url = state.host_url.join_path(&path)?;
        state.config.auth_callback_path = path;
        Ok(())
    })
}

/// Skips the OAuth flow and uses `session_id` directly.
pub fn bypass_auth_with_session_id(session_id: impl Into<String>) -> AppOption {
    let session_id = session_id.into();
    AppOption::set(move |state| state.config.bypass_session_id = Some(session_id))
}

/// Replaces the default in-memory session store.
///
/// The app shares ownership of `store` and never tears it down.
pub fn with_session_store(store: Arc<dyn SessionStore>) -> AppOption {
    AppOption::set(move |state| state.session_store = store)
}

/// Registers a callback run after a shop installs the app.
pub fn with_install_hook(hook: impl Fn() + Send + Sync + 'static) -> AppOption {
    let hook: Arc<dyn Fn() + Send + Sync> = Arc::new(hook);
    AppOption::set(move |state| state.config.install_hook = Some(hook))
}

/// Registers the path the uninstall webhook is delivered to.
pub fn with_uninstall_hook(path: impl Into<String>) -> AppOption {
    let path = path.into();
    AppOption::set(move |state| state.config.uninstall_path = Some(path))
}

/// Sets whether the app is embedded in the Shopify admin.
pub fn with_is_embedded(embedded: bool) -> AppOption {
    AppOption::set(move |state| state.config.embedded = embedded)
}

/// Trusts `domains` in addition to the default shop domains.
///
/// The matcher is rebuilt from the defaults plus exactly these domains; the
/// domains passed to an earlier call are discarded.
///
/// # Example
///
/// ```rust
/// use shopify_app::{App, AppConfig, Credentials, with_custom_shop_domains};
///
/// let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
/// let app = App::new(config, [with_custom_shop_domains(["example.org"])]).unwrap();
/// assert!(app.config().shop_matcher().matches("tenant.example.org"));
/// assert!(app.config().shop_matcher().matches("tenant.myshopify.com"));
/// ```
pub fn with_custom_shop_domains<I, S>(domains: I) -> AppOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let domains: Vec<String> = domains.into_iter().map(Into::into).collect();
    AppOption::try_set(move |state| {
        state.config.shop_matcher = ShopDomainMatcher::new(&domains)?;
        Ok(())
    })
}
