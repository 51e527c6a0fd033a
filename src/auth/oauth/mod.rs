//! OAuth authorization code flow helpers.
//!
//! These helpers build and check the two redirects of the flow against an
//! [`App`](crate::App)'s configuration. They make no network calls; exchanging
//! the verified code for an access token is left to the caller.
//!
//! 1. [`begin_auth`]: Build the authorization URL and a fresh [`StateParam`]
//! 2. [`verify_auth_callback`]: Check the callback's HMAC, state, and shop
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{App, AppConfig, Credentials};
//! use shopify_app::auth::oauth::{begin_auth, hmac, verify_auth_callback, AuthQuery};
//!
//! let app = App::new(
//!     AppConfig::new("https://myapp.example.com", Credentials::new("id", "secret")),
//!     [],
//! )
//! .unwrap();
//!
//! let started = begin_auth(&app, "my-shop.myshopify.com", false).unwrap();
//!
//! // Shopify redirects back with a signed query
//! let mut query = AuthQuery::new(
//!     "auth-code",
//!     "my-shop.myshopify.com",
//!     "1700000000",
//!     started.state.as_str(),
//!     None,
//!     "",
//! );
//! query.hmac = hmac::compute_signature(&query.to_signable_string(), "secret");
//!
//! let verified = verify_auth_callback(&app, &query, started.state.as_str()).unwrap();
//! assert_eq!(verified.code, "auth-code");
//! ```

mod begin_auth;
mod callback;
mod error;
pub mod hmac;
mod query;
mod state;

pub use begin_auth::{begin_auth, BeginAuthResult};
pub use callback::{verify_auth_callback, VerifiedCallback};
pub use error::OAuthError;
pub use hmac::validate_hmac;
pub use query::AuthQuery;
pub use state::StateParam;
