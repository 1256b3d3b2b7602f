//! In-memory user store.
//!
//! ## Ids
//!
//! Ids start at 1 and are handed out in insertion order. A rejected insert
//! (duplicate email) does not consume an id, so ids have no gaps.
//!
//! ## Lifetime
//!
//! State lives only as long as the process. Clones share the same map, so
//! the entry point creates one store and hands clones to whoever needs it.

use crate::{Result as StoreErrorResult, StoreError};

use sg_core::{NewUser, User, UserApproval};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;
use tokio::sync::RwLock;

#[derive(Debug)]
struct StoreState {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    state: Arc<RwLock<StoreState>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_user(&self, id: u64) -> Option<User> {
        self.state.read().await.users.get(&id).cloned()
    }

    /// Email comparison ignores ASCII case
    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.state
            .read()
            .await
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Insert a pending user under the next sequential id.
    ///
    /// Fails only when another user already has the same email.
    pub async fn create_user(&self, new_user: NewUser) -> StoreErrorResult<User> {
        let mut state = self.state.write().await;

        if state
            .users
            .values()
            .any(|user| user.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(StoreError::DuplicateEmail {
                email: new_user.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = state.next_id;
        state.next_id += 1;

        let user = User::new(id, new_user);
        state.users.insert(id, user.clone());
        debug!("Stored user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Merge approval fields into an existing user.
    ///
    /// Returns `Ok(None)` without touching the store when `id` is unknown.
    pub async fn approve_user(
        &self,
        id: u64,
        approval: UserApproval,
    ) -> StoreErrorResult<Option<User>> {
        if !approval.is_consistent() {
            return Err(StoreError::InvalidApproval {
                message: "an approved user must record who approved them".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut state = self.state.write().await;
        let Some(existing) = state.users.get(&id) else {
            return Ok(None);
        };

        let updated = existing.with_approval(&approval);
        state.users.insert(id, updated.clone());
        debug!(
            "User {} approval set to {} by {:?}",
            id, updated.is_approved, updated.approved_by
        );

        Ok(Some(updated))
    }

    /// Users still waiting for approval, oldest first
    pub async fn get_pending_users(&self) -> Vec<User> {
        self.state
            .read()
            .await
            .users
            .values()
            .filter(|user| user.is_pending())
            .cloned()
            .collect()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }
}
