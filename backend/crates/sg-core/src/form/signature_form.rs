//! Signature form state.

use crate::{FormField, SignatureFields};

use std::ops::Range;

/// Phone number pre-filled in a fresh form
pub const DEFAULT_PHONE: &str = "415 979 9775";

/// Keep only ASCII digits and whitespace
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Current values of the signature form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureForm {
    fields: SignatureFields,
}

impl SignatureForm {
    pub fn new() -> Self {
        Self {
            fields: SignatureFields {
                phone: DEFAULT_PHONE.to_string(),
                ..SignatureFields::default()
            },
        }
    }

    pub fn fields(&self) -> &SignatureFields {
        &self.fields
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Title => &self.fields.title,
            FormField::Email => &self.fields.email,
            FormField::Phone => &self.fields.phone,
        }
    }

    /// Replace a field value. Phone input is filtered to digits and spaces.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.fields.name = value.to_string(),
            FormField::Title => self.fields.title = value.to_string(),
            FormField::Email => self.fields.email = value.to_string(),
            FormField::Phone => self.fields.phone = sanitize_phone(value),
        }
    }

    /// Paste into the phone field over the selected character range.
    ///
    /// The pasted text is filtered first; an out-of-range selection is
    /// clamped to the current value.
    pub fn paste_phone(&mut self, pasted: &str, selection: Range<usize>) {
        let current: Vec<char> = self.fields.phone.chars().collect();
        let end = selection.end.min(current.len());
        let start = selection.start.min(end);

        let mut updated: String = current[..start].iter().collect();
        updated.push_str(&sanitize_phone(pasted));
        updated.extend(current[end..].iter());

        self.fields.phone = updated;
    }

    /// Restore the default values
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SignatureForm {
    fn default() -> Self {
        Self::new()
    }
}
