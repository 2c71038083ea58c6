//! Repository integration tests over in-memory SQLite.
//!
//! Covers the storage-layer uniqueness backstop: a duplicate insert that
//! slipped past the pre-insert lookups still fails as a conflict.

use sea_orm_migration::MigratorTrait;

use signup_api::errors::AppError;
use signup_api::infra::{db::Migrator, AccountRepository, AccountStore};

async fn test_store() -> AccountStore {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let connection = sea_orm::Database::connect(options)
        .await
        .expect("sqlite connection");

    Migrator::up(&connection, None).await.expect("migrations");

    AccountStore::new(connection)
}

#[tokio::test]
async fn test_create_and_find_back() {
    let store = test_store().await;

    let created = store
        .create(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
        .await
        .unwrap();

    let by_email = store.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().id, created.id);

    let by_username = store.find_by_username("alice").await.unwrap();
    assert_eq!(by_username.unwrap().id, created.id);
}

#[tokio::test]
async fn test_find_missing_yields_none() {
    let store = test_store().await;

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    assert!(store.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_insert_fails_as_conflict() {
    let store = test_store().await;

    store
        .create(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
        .await
        .unwrap();

    // Bypasses the service-level lookups, as a lost race would
    let err = store
        .create(
            "alice2".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "Email already exists"),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_duplicate_username_insert_fails_as_conflict() {
    let store = test_store().await;

    store
        .create(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
        .await
        .unwrap();

    let err = store
        .create(
            "alice".to_string(),
            "other@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        )
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "Username already exists"),
        other => panic!("expected conflict, got {:?}", other),
    }
}
