use sg_core::User;

use chrono::SecondsFormat;
use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub is_approved: bool,
    pub approved_by: Option<String>,
    /// RFC 3339 with millisecond precision, e.g. `2025-07-14T18:21:02.500Z`
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            is_approved: u.is_approved,
            approved_by: u.approved_by,
            created_at: u.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
