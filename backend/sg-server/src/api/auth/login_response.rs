use crate::UserDto;

use serde::Serialize;

/// Successful login: the user plus the session token also set as a cookie
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
    pub token: String,
}
