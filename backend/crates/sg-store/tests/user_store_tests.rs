mod common;

use common::{new_user, store_with_users};

use sg_core::{NewUser, UserApproval};
use sg_store::{StoreError, UserStore};

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_store_when_user_created_then_gets_id_one_and_is_pending() {
    // Given
    let store = UserStore::new();

    // When
    let user = store
        .create_user(NewUser::new("a@socialmarketing.com", "A"))
        .await
        .unwrap();

    // Then
    assert_that!(user.id, eq(1));
    assert_that!(user.is_approved, eq(false));
    assert_that!(user.approved_by, none());
}

#[tokio::test]
async fn given_created_user_when_found_by_email_then_is_unapproved() {
    let store = store_with_users(&["a"]).await;

    let found = store.get_user_by_email("a@socialmarketing.com").await;

    assert_that!(found, some(anything()));
    let found = found.unwrap();
    assert_that!(found.id, eq(1));
    assert_that!(found.is_approved, eq(false));
}

#[tokio::test]
async fn given_mixed_case_email_when_found_by_email_then_matches() {
    let store = store_with_users(&["a"]).await;

    let found = store.get_user_by_email("A@SocialMarketing.com").await;

    assert_that!(found, some(anything()));
}

#[tokio::test]
async fn given_several_users_when_created_then_ids_are_sequential() {
    let store = store_with_users(&["a", "b", "c"]).await;

    let ids: Vec<u64> = store.get_pending_users().await.iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_that!(store.user_count().await, eq(3));
}

#[tokio::test]
async fn given_existing_email_when_created_again_then_duplicate_error_and_no_id_consumed() {
    let store = store_with_users(&["a"]).await;

    let duplicate = store
        .create_user(NewUser::new("A@socialmarketing.com", "Other"))
        .await;

    assert!(matches!(duplicate, Err(StoreError::DuplicateEmail { .. })));
    assert_that!(store.user_count().await, eq(1));

    let next = store.create_user(new_user("b")).await.unwrap();
    assert_that!(next.id, eq(2));
}

#[tokio::test]
async fn given_existing_user_when_approved_then_get_user_reflects_fields() {
    let store = store_with_users(&["a"]).await;

    let updated = store
        .approve_user(1, UserApproval::approved_by("admin"))
        .await
        .unwrap();

    assert_that!(updated, some(anything()));
    let user = store.get_user(1).await.unwrap();
    assert_that!(user.is_approved, eq(true));
    assert_eq!(user.approved_by.as_deref(), Some("admin"));
    assert_eq!(user.email, "a@socialmarketing.com");
}

#[tokio::test]
async fn given_approved_user_then_no_longer_pending() {
    let store = store_with_users(&["a", "b"]).await;

    store
        .approve_user(1, UserApproval::approved_by("admin"))
        .await
        .unwrap();

    let pending = store.get_pending_users().await;
    assert_that!(pending.len(), eq(1));
    assert_that!(pending[0].id, eq(2));
}

#[tokio::test]
async fn given_unknown_id_when_approved_then_none_and_store_unchanged() {
    let store = store_with_users(&["a"]).await;
    let before = store.get_pending_users().await;

    let result = store
        .approve_user(42, UserApproval::approved_by("admin"))
        .await
        .unwrap();

    assert_that!(result, none());
    assert_eq!(store.get_pending_users().await, before);
    assert_that!(store.get_user(42).await, none());
}

#[tokio::test]
async fn given_approval_without_approver_when_approved_then_rejected() {
    let store = store_with_users(&["a"]).await;

    let result = store
        .approve_user(
            1,
            UserApproval {
                is_approved: true,
                approved_by: None,
            },
        )
        .await;

    assert!(matches!(result, Err(StoreError::InvalidApproval { .. })));
    assert_that!(store.get_user(1).await.unwrap().is_approved, eq(false));
}

#[tokio::test]
async fn given_request_then_approval_scenario_then_pending_list_empty() {
    let store = UserStore::new();
    let created = store
        .create_user(NewUser::new("a@socialmarketing.com", "A"))
        .await
        .unwrap();
    assert_that!(created.id, eq(1));

    store
        .approve_user(created.id, UserApproval::approved_by("admin"))
        .await
        .unwrap();

    assert_that!(store.get_pending_users().await.is_empty(), eq(true));
}

#[tokio::test]
async fn given_cloned_handle_then_state_is_shared() {
    let store = UserStore::new();
    let handle = store.clone();

    handle.create_user(new_user("a")).await.unwrap();

    assert_that!(store.user_count().await, eq(1));
}
