use crate::{BootstrapOutcome, approve_bootstrap_admin};

use sg_config::BootstrapConfig;
use sg_core::NewUser;
use sg_store::UserStore;

use googletest::prelude::*;

fn config(create_if_missing: bool) -> BootstrapConfig {
    BootstrapConfig {
        create_if_missing,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_pending_admin_is_approved_by_system() {
    let store = UserStore::new();
    let admin = store
        .create_user(NewUser::new("admin@socialmarketing.com", "Admin"))
        .await
        .unwrap();

    let outcome = approve_bootstrap_admin(&store, &config(true)).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Approved(_)));
    let stored = store.get_user(admin.id).await.unwrap();
    assert_that!(stored.is_approved, eq(true));
    assert_eq!(stored.approved_by.as_deref(), Some("system"));
}

#[tokio::test]
async fn test_missing_admin_is_created_when_allowed() {
    let store = UserStore::new();

    let outcome = approve_bootstrap_admin(&store, &config(true)).await.unwrap();

    match outcome {
        BootstrapOutcome::Created(user) => {
            assert_eq!(user.email, "admin@socialmarketing.com");
            assert_eq!(user.name, "Administrator");
            assert_that!(user.is_approved, eq(true));
        }
        other => panic!("expected Created, got {other:?}"),
    }
    assert_that!(store.get_pending_users().await.len(), eq(0));
}

#[tokio::test]
async fn test_missing_admin_left_alone_without_create() {
    let store = UserStore::new();

    let outcome = approve_bootstrap_admin(&store, &config(false)).await.unwrap();

    assert_eq!(outcome, BootstrapOutcome::Missing);
    assert_that!(store.user_count().await, eq(0));
}

#[tokio::test]
async fn test_already_approved_admin_is_untouched() {
    let store = UserStore::new();
    approve_bootstrap_admin(&store, &config(true)).await.unwrap();

    let outcome = approve_bootstrap_admin(&store, &config(true)).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::AlreadyApproved(_)));
    assert_that!(store.user_count().await, eq(1));
}

#[tokio::test]
async fn test_admin_lookup_ignores_case() {
    let store = UserStore::new();
    store
        .create_user(NewUser::new("Admin@SocialMarketing.com", "Admin"))
        .await
        .unwrap();

    let outcome = approve_bootstrap_admin(&store, &config(true)).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Approved(_)));
    assert_that!(store.user_count().await, eq(1));
}
