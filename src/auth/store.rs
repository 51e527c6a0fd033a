//! Session persistence.
//!
//! [`SessionStore`] is the contract authenticated-request handling uses to
//! look up and save per-shop and per-user sessions. [`InMemorySessionStore`]
//! is the default; any other backend (a database, a distributed cache)
//! replaces it wholesale through
//! [`with_session_store`](crate::app::with_session_store).

use crate::auth::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors returned by a [`SessionStore`].
///
/// A missing session is not an error; loads return `Ok(None)` for that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionStoreError {
    /// Session ids must be non-empty.
    #[error("Session id cannot be empty")]
    EmptySessionId,

    /// The backing storage failed.
    #[error("Session storage unavailable: {reason}")]
    Unavailable {
        /// Backend-specific description of the failure.
        reason: String,
    },
}

/// Pluggable storage for [`Session`]s, keyed by [`Session::id`].
///
/// Implementations must be safe to call from many request handlers at once.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `session` under its id, replacing any previous value.
    async fn store_session(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Loads the session stored under `id`, or `None` if there is none.
    async fn load_session(&self, id: &str) -> Result<Option<Session>, SessionStoreError>;

    /// Removes the session stored under `id`.
    ///
    /// Returns `true` if a session was removed.
    async fn delete_session(&self, id: &str) -> Result<bool, SessionStoreError>;
}

/// Process-local [`SessionStore`] backed by a `HashMap`.
///
/// Sessions live as long as the store and are lost on restart. Each
/// operation holds the lock for the duration of a single map access, so a
/// load racing a store for the same id sees either the old or the new
/// session in full.
///
/// # Example
///
/// ```rust
/// use shopify_app::{InMemorySessionStore, Session, SessionStore, Shop, Scopes};
///
/// # tokio_test::block_on(async {
/// let store = InMemorySessionStore::new();
/// let shop = Shop::new("my-store.myshopify.com").unwrap();
/// let session = Session::new(
///     Session::offline_id(&shop),
///     shop,
///     "token".to_string(),
///     Scopes::default(),
///     false,
///     None,
/// );
///
/// store.store_session(session.clone()).await.unwrap();
/// let loaded = store.load_session(&session.id).await.unwrap();
/// assert_eq!(loaded, Some(session));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn check_id(id: &str) -> Result<(), SessionStoreError> {
        if id.is_empty() {
            return Err(SessionStoreError::EmptySessionId);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn store_session(&self, session: Session) -> Result<(), SessionStoreError> {
        Self::check_id(&session.id)?;
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn load_session(&self, id: &str) -> Result<Option<Session>, SessionStoreError> {
        Self::check_id(id)?;
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete_session(&self, id: &str) -> Result<bool, SessionStoreError> {
        Self::check_id(id)?;
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}

// Verify InMemorySessionStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InMemorySessionStore>();
};
