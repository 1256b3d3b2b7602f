//! Live signature preview.
//!
//! Every edit re-renders immediately, so `rendered()` always matches the
//! form. Logo replacement only changes in-memory state.

use crate::{
    ClipboardPayload, CoreError, DEFAULT_LOGO_FILENAME, FIRST_ARCHIVE_VERSION, FormField, Logo,
    RenderedSignature, Result as CoreResult, SignatureForm, SignatureTemplate, archive_file_name,
    is_image_content_type, resize_to_width,
};

use std::ops::Range;
use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;

/// Outcome of swapping in a new logo
#[derive(Debug, Clone)]
pub struct LogoReplacement {
    pub logo: Logo,
    /// Name the previous logo was archived under
    pub archived_name: String,
    /// Scaled PNG bytes of the new logo
    pub png: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct PreviewSession {
    form: SignatureForm,
    template: SignatureTemplate,
    logo_filename: String,
    next_archive_version: u32,
    active_logo: Option<Logo>,
    archived_logos: Vec<Logo>,
    rendered: RenderedSignature,
}

impl PreviewSession {
    pub fn new(template: SignatureTemplate) -> Self {
        let form = SignatureForm::new();
        let rendered = template.render(form.fields());

        Self {
            form,
            template,
            logo_filename: DEFAULT_LOGO_FILENAME.to_string(),
            next_archive_version: FIRST_ARCHIVE_VERSION,
            active_logo: None,
            archived_logos: Vec::new(),
            rendered,
        }
    }

    pub fn form(&self) -> &SignatureForm {
        &self.form
    }

    pub fn rendered(&self) -> &RenderedSignature {
        &self.rendered
    }

    pub fn active_logo(&self) -> Option<&Logo> {
        self.active_logo.as_ref()
    }

    pub fn archived_logos(&self) -> &[Logo] {
        &self.archived_logos
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> &RenderedSignature {
        self.form.set(field, value);
        self.rerender()
    }

    pub fn paste_phone(&mut self, pasted: &str, selection: Range<usize>) -> &RenderedSignature {
        self.form.paste_phone(pasted, selection);
        self.rerender()
    }

    pub fn reset(&mut self) -> &RenderedSignature {
        self.form.reset();
        self.rerender()
    }

    #[track_caller]
    pub fn clipboard_payload(&self) -> CoreResult<ClipboardPayload> {
        ClipboardPayload::from_rendered(&self.rendered)
    }

    /// Scale an uploaded image to `target_width` and make it the active logo.
    ///
    /// The outgoing logo is archived under the next free version suffix
    /// (`_v2` for the shipped logo, then `_v3`, `_v4`, ...), so archived
    /// names never repeat within a session.
    #[track_caller]
    pub fn replace_logo(
        &mut self,
        content_type: &str,
        original_name: &str,
        bytes: &[u8],
        target_width: u32,
    ) -> CoreResult<LogoReplacement> {
        if !is_image_content_type(content_type) {
            return Err(CoreError::UnsupportedContentType {
                content_type: content_type.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let resized = resize_to_width(bytes, target_width)?;
        let archived_name = archive_file_name(&self.logo_filename, self.next_archive_version);
        self.next_archive_version += 1;

        let logo = Logo {
            filename: self.logo_filename.clone(),
            original_name: original_name.to_string(),
            is_active: true,
            is_archived: false,
            uploaded_at: Utc::now(),
            width: resized.width,
            height: resized.height,
            file_size: resized.bytes.len() as u64,
        };

        if let Some(previous) = self.active_logo.replace(logo.clone()) {
            self.archived_logos.push(previous.archive(archived_name.clone()));
        }
        self.rerender();

        Ok(LogoReplacement {
            logo,
            archived_name,
            png: resized.bytes,
        })
    }

    fn rerender(&mut self) -> &RenderedSignature {
        self.rendered = self.template.render(self.form.fields());
        &self.rendered
    }
}
