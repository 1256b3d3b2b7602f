use crate::to_plain_text;

use serde::Serialize;

/// HTML signature and the plain-text fallback derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSignature {
    pub html: String,
    pub plain_text: String,
}

impl RenderedSignature {
    pub fn from_html(html: String) -> Self {
        let plain_text = to_plain_text(&html);
        Self { html, plain_text }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
