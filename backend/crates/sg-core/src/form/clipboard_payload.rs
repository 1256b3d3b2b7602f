use crate::{CoreError, RenderedSignature, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

pub const HTML_MIME: &str = "text/html";
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// What gets written to the clipboard when the user copies a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardPayload {
    pub html: String,
    pub plain_text: String,
}

impl ClipboardPayload {
    #[track_caller]
    pub fn from_rendered(rendered: &RenderedSignature) -> CoreResult<Self> {
        if rendered.is_empty() {
            return Err(CoreError::SignatureNotReady {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            html: rendered.html.clone(),
            plain_text: rendered.plain_text.clone(),
        })
    }

    /// One entry per MIME type, rich format first
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            (HTML_MIME, self.html.as_str()),
            (PLAIN_TEXT_MIME, self.plain_text.as_str()),
        ]
    }

    /// Text used by the selection-and-copy fallback (the raw markup)
    pub fn legacy_text(&self) -> &str {
        &self.html
    }
}
