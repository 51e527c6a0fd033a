//! Session management for Shopify API authentication.
//!
//! This module provides the [`Session`] type, the unit persisted by a
//! [`SessionStore`](crate::auth::SessionStore).

use crate::auth::Scopes;
use crate::config::Shop;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an authenticated session for a shop.
///
/// Sessions are either offline (app-level, one per shop) or online (tied to
/// one admin user of a shop).
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use shopify_app::{Session, Shop, Scopes};
///
/// let shop = Shop::new("my-store.myshopify.com").unwrap();
/// let session = Session::new(
///     Session::offline_id(&shop),
///     shop,
///     "access-token".to_string(),
///     Scopes::new(["read_products"]),
///     false, // offline session
///     None,  // no expiration
/// );
///
/// assert_eq!(session.id, "offline_my-store.myshopify.com");
/// assert!(session.is_active());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session; the key it is stored under.
    pub id: String,

    /// The shop this session is for.
    pub shop: Shop,

    /// The access token for API authentication.
    pub access_token: String,

    /// The OAuth scopes granted to this session.
    pub scopes: Scopes,

    /// Whether this is an online (user-specific) session.
    pub is_online: bool,

    /// When this session expires, if applicable.
    pub expires: Option<DateTime<Utc>>,

    /// OAuth state parameter, if applicable.
    pub state: Option<String>,

    /// The admin user an online session belongs to.
    pub user_id: Option<u64>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub const fn new(
        id: String,
        shop: Shop,
        access_token: String,
        scopes: Scopes,
        is_online: bool,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            shop,
            access_token,
            scopes,
            is_online,
            expires,
            state: None,
            user_id: None,
        }
    }

    /// Returns the id of the offline session for `shop`.
    #[must_use]
    pub fn offline_id(shop: &Shop) -> String {
        format!("offline_{shop}")
    }

    /// Returns the id of the online session for `user_id` on `shop`.
    #[must_use]
    pub fn online_id(shop: &Shop, user_id: u64) -> String {
        format!("{shop}_{user_id}")
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
