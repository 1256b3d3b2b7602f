#![allow(dead_code)]

use sg_core::NewUser;
use sg_store::UserStore;

/// Access request for `<local>@socialmarketing.com`
pub fn new_user(local: &str) -> NewUser {
    NewUser::new(format!("{}@socialmarketing.com", local), local.to_uppercase())
}

/// Store pre-populated with one pending user per local part, in order
pub async fn store_with_users(locals: &[&str]) -> UserStore {
    let store = UserStore::new();
    for local in locals {
        store
            .create_user(new_user(local))
            .await
            .expect("Failed to create test user");
    }
    store
}
