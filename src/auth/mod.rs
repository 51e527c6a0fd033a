//! Authentication types for Shopify apps.
//!
//! This module provides types for handling OAuth scopes, sessions, and the
//! storage sessions are persisted in.
//!
//! # Overview
//!
//! - [`Scopes`]: The canonical, sorted list of requested OAuth scopes
//! - [`Session`]: An authenticated session for one shop (and optionally one user)
//! - [`SessionStore`]: The persistence contract for sessions
//! - [`InMemorySessionStore`]: The default, process-local store
//! - [`oauth`]: Authorization URL construction and callback verification
//!
//! # Session Types
//!
//! - **Offline sessions**: App-level tokens, one per shop, used for
//!   background work. Keyed by [`Session::offline_id`].
//! - **Online sessions**: User-specific tokens that expire. Keyed by
//!   [`Session::online_id`].

pub mod oauth;
mod scopes;
pub mod session;
pub mod store;

pub use scopes::Scopes;
pub use session::Session;
pub use store::{InMemorySessionStore, SessionStore, SessionStoreError};
