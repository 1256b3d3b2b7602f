//! User entity - one record per access request.

use crate::{NewUser, UserApproval};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person who asked for access to the generator.
///
/// Records are created pending and only ever change through
/// [`User::with_approval`]; they are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sequential identifier assigned by the store, starting at 1
    pub id: u64,
    pub email: String,
    pub name: String,
    pub is_approved: bool,
    /// Who approved the user; always set once `is_approved` is true
    pub approved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a pending user from an access request
    pub fn new(id: u64, new_user: NewUser) -> Self {
        Self {
            id,
            email: new_user.email,
            name: new_user.name,
            is_approved: false,
            approved_by: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the user is still waiting for approval
    pub fn is_pending(&self) -> bool {
        !self.is_approved
    }

    /// Shallow-merge approval fields into a copy of this record
    pub fn with_approval(&self, approval: &UserApproval) -> Self {
        Self {
            is_approved: approval.is_approved,
            approved_by: approval.approved_by.clone(),
            ..self.clone()
        }
    }
}
