use serde::Deserialize;

/// Body of `POST /api/auth/request-access`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RequestAccessRequest {
    pub email: String,
    pub name: String,
}
