use serde::{Deserialize, Serialize};

/// Approval fields merged into an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApproval {
    pub is_approved: bool,
    pub approved_by: Option<String>,
}

impl UserApproval {
    /// Approval granted by `approver`
    pub fn approved_by(approver: impl Into<String>) -> Self {
        Self {
            is_approved: true,
            approved_by: Some(approver.into()),
        }
    }

    /// An approval must name who granted it
    pub fn is_consistent(&self) -> bool {
        !self.is_approved
            || self
                .approved_by
                .as_deref()
                .is_some_and(|approver| !approver.trim().is_empty())
    }
}
