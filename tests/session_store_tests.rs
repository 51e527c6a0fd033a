//! Integration tests for the in-memory session store under concurrency.

use shopify_app::{InMemorySessionStore, Scopes, Session, SessionStore, SessionStoreError, Shop};
use std::sync::Arc;

fn session(id: &str, token: &str) -> Session {
    Session::new(
        id.to_string(),
        Shop::new("store.myshopify.com").unwrap(),
        token.to_string(),
        Scopes::new(["read_products"]),
        false,
        None,
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_operations_on_distinct_keys_do_not_interfere() {
    let store = Arc::new(InMemorySessionStore::new());
    let sentinel = session("sentinel", "sentinel-token");
    store.store_session(sentinel.clone()).await.unwrap();

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let id = format!("session-{i}");
                for round in 0..20 {
                    let token = format!("token-{i}-{round}");
                    store.store_session(session(&id, &token)).await.unwrap();

                    let loaded = store.load_session(&id).await.unwrap().unwrap();
                    assert_eq!(loaded.access_token, token);

                    if round % 2 == 1 {
                        assert!(store.delete_session(&id).await.unwrap());
                        assert!(store.load_session(&id).await.unwrap().is_none());
                    }
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.load_session("sentinel").await.unwrap(), Some(sentinel));
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_racing_writes_see_whole_sessions() {
    let store = Arc::new(InMemorySessionStore::new());
    store.store_session(session("shared", "v0")).await.unwrap();

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for version in 1..=100 {
                store
                    .store_session(session("shared", &format!("v{version}")))
                    .await
                    .unwrap();
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for _ in 0..100 {
                let loaded = store.load_session("shared").await.unwrap().unwrap();
                assert_eq!(loaded.id, "shared");
                assert!(loaded.access_token.starts_with('v'));
                assert_eq!(loaded.scopes.to_string(), "read_products");
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();

    let last = store.load_session("shared").await.unwrap().unwrap();
    assert_eq!(last.access_token, "v100");
}

#[tokio::test]
async fn test_missing_session_is_not_an_error() {
    let store = InMemorySessionStore::new();
    assert_eq!(store.load_session("nope").await, Ok(None));
    assert_eq!(store.delete_session("nope").await, Ok(false));
}

#[tokio::test]
async fn test_empty_id_is_rejected() {
    let store = InMemorySessionStore::new();
    assert_eq!(
        store.store_session(session("", "token")).await,
        Err(SessionStoreError::EmptySessionId)
    );
    assert_eq!(
        store.load_session("").await,
        Err(SessionStoreError::EmptySessionId)
    );
}
