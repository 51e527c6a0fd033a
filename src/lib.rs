//! # Shopify App
//!
//! Application configuration for Shopify apps: build an [`App`] once at
//! startup from a base [`AppConfig`] and a list of functional options, then
//! share it with every request handler.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`App`] construction with defaults and ordered [`AppOption`]s
//! - Validated value types: [`HostUrl`], [`Shop`], [`ApiVersion`], [`Credentials`]
//! - Canonical OAuth [`Scopes`] (sorted, so equal sets compare equal)
//! - A [`ShopDomainMatcher`] that decides which shop domains are trusted
//! - The [`SessionStore`] contract and an [`InMemorySessionStore`]
//! - OAuth helpers in [`auth::oauth`] for building and verifying redirects
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_app::{
//!     App, AppConfig, ApiVersion, Credentials, with_custom_shop_domains, with_is_embedded,
//!     with_scopes, with_version,
//! };
//!
//! let config = AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret"));
//! let app = App::new(
//!     config,
//!     [
//!         with_version("2023-07"),
//!         with_scopes(["write_products", "read_orders"]),
//!         with_is_embedded(false),
//!         with_custom_shop_domains(["shops.example.org"]),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(app.config().api_version(), ApiVersion::V2023_07);
//! assert_eq!(app.config().scopes().to_string(), "read_orders,write_products");
//! assert!(app.validate_shop("tenant.shops.example.org").is_ok());
//! assert!(app.validate_shop("tenant.attacker.com").is_err());
//! ```
//!
//! ## Session Management
//!
//! Apps get an in-memory session store unless one is supplied with
//! [`with_session_store`]. Any type implementing [`SessionStore`] can be
//! plugged in:
//!
//! ```rust
//! use shopify_app::{
//!     App, AppConfig, Credentials, InMemorySessionStore, Scopes, Session, SessionStore, Shop,
//! };
//! use shopify_app::with_session_store;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemorySessionStore::new());
//! let app = App::new(
//!     AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret")),
//!     [with_session_store(store.clone())],
//! )
//! .unwrap();
//!
//! tokio_test::block_on(async {
//!     let shop = Shop::new("my-store.myshopify.com").unwrap();
//!     let session = Session::new(
//!         Session::offline_id(&shop),
//!         shop,
//!         "access-token".to_string(),
//!         Scopes::default(),
//!         false,
//!         None,
//!     );
//!     app.session_store().store_session(session).await.unwrap();
//!     assert_eq!(store.len().await, 1);
//! });
//! ```
//!
//! ## Design Principles
//!
//! - **No global mutable state**: Every app owns its configuration and store
//! - **Fail-fast construction**: `App::new` returns a complete app or an error
//! - **Immutable after construction**: Nothing on an `App` changes once built
//! - **Thread-safe**: All public types are `Send + Sync`

pub mod app;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use app::{
    bypass_auth_with_session_id, with_auth_begin_endpoint, with_auth_callback_endpoint,
    with_custom_shop_domains, with_default_auth, with_install_hook, with_is_embedded, with_retry,
    with_scopes, with_session_store, with_uninstall_hook, with_version, App, AppBuilder,
    AppOption,
};
pub use auth::{InMemorySessionStore, Scopes, Session, SessionStore, SessionStoreError};
pub use config::{
    ApiVersion, AppConfig, Credentials, HostUrl, InstallHook, Shop, ShopDomainMatcher,
    DEFAULT_SHOP_DOMAINS,
};
pub use error::ConfigError;

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_auth, verify_auth_callback, AuthQuery, BeginAuthResult, OAuthError, StateParam,
    VerifiedCallback,
};
