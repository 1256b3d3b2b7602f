use metrics::counter;

/// Metrics collector for the signature server
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "sg_server" }
    }

    /// Record an access request that created a pending user
    pub fn access_requested(&self) {
        counter!(format!("{}.access_requests", self.prefix)).increment(1);
    }

    /// Record a pending user becoming approved
    pub fn user_approved(&self, approver: &str) {
        counter!(format!("{}.users_approved", self.prefix)).increment(1);
        counter!(format!("{}.users_approved.{}", self.prefix, approver_kind(approver)))
            .increment(1);
    }

    pub fn login(&self) {
        counter!(format!("{}.logins", self.prefix)).increment(1);
    }

    pub fn signature_rendered(&self) {
        counter!(format!("{}.signatures_rendered", self.prefix)).increment(1);
    }

    pub fn logo_resized(&self) {
        counter!(format!("{}.logos_resized", self.prefix)).increment(1);
    }

    /// Record error occurrence by API error code
    pub fn error_occurred(&self, code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, code.to_lowercase())).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

// Metric names never carry the approver's email.
fn approver_kind(approver: &str) -> &'static str {
    if approver.contains('@') { "admin" } else { "system" }
}
