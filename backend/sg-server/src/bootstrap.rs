//! Startup approval of the administrator account
//!
//! Shortly after start the configured admin email is looked up and approved,
//! so the first administrator never needs another admin to let them in.

use crate::Metrics;

use sg_config::BootstrapConfig;
use sg_core::{NewUser, User, UserApproval};
use sg_store::{Result as StoreErrorResult, StoreError, UserStore};

use std::time::Duration;

use log::{error, info, warn};
use tokio::task::JoinHandle;

/// What a bootstrap pass did to the admin record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// An existing pending record was approved
    Approved(User),
    /// The record was created and approved
    Created(User),
    /// Nothing to do
    AlreadyApproved(User),
    /// No record and `create_if_missing` is off
    Missing,
}

/// Spawn the delayed bootstrap task. Returns `None` when disabled.
pub fn spawn_admin_bootstrap(
    store: UserStore,
    config: BootstrapConfig,
    metrics: Metrics,
) -> Option<JoinHandle<()>> {
    if !config.enabled {
        info!("Admin bootstrap disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;

        match approve_bootstrap_admin(&store, &config).await {
            Ok(BootstrapOutcome::Approved(user)) => {
                metrics.user_approved(&config.approved_by);
                info!("Bootstrap approved admin {} (id {})", user.email, user.id);
            }
            Ok(BootstrapOutcome::Created(user)) => {
                metrics.user_approved(&config.approved_by);
                info!("Bootstrap created admin {} (id {})", user.email, user.id);
            }
            Ok(BootstrapOutcome::AlreadyApproved(user)) => {
                info!("Admin {} already approved", user.email);
            }
            Ok(BootstrapOutcome::Missing) => {
                warn!(
                    "Admin {} has not requested access, nothing to approve",
                    config.admin_email
                );
            }
            Err(e) => error!("Admin bootstrap failed: {}", e),
        }
    }))
}

/// Approve (and optionally create) the configured admin record
pub async fn approve_bootstrap_admin(
    store: &UserStore,
    config: &BootstrapConfig,
) -> StoreErrorResult<BootstrapOutcome> {
    let (user, created) = match store.get_user_by_email(&config.admin_email).await {
        Some(user) if user.is_approved => return Ok(BootstrapOutcome::AlreadyApproved(user)),
        Some(user) => (user, false),
        None if config.create_if_missing => {
            let new_user = NewUser::new(config.admin_email.clone(), config.admin_name.clone());
            match store.create_user(new_user).await {
                Ok(user) => (user, true),
                // Requested access concurrently; approve that record instead
                Err(StoreError::DuplicateEmail { .. }) => {
                    match store.get_user_by_email(&config.admin_email).await {
                        Some(user) => (user, false),
                        None => return Ok(BootstrapOutcome::Missing),
                    }
                }
                Err(e) => return Err(e),
            }
        }
        None => return Ok(BootstrapOutcome::Missing),
    };

    let approval = UserApproval::approved_by(config.approved_by.clone());
    let approved = store.approve_user(user.id, approval).await?;

    Ok(match approved {
        Some(user) if created => BootstrapOutcome::Created(user),
        Some(user) => BootstrapOutcome::Approved(user),
        None => BootstrapOutcome::Missing,
    })
}
