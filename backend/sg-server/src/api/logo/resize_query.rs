use serde::Deserialize;

/// Query string of `POST /api/logo/resize`
#[derive(Debug, Deserialize)]
pub struct ResizeQuery {
    /// Target width in pixels; `signature.logo_target_width` when absent
    pub width: Option<u32>,
}
