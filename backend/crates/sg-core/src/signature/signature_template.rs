//! Email signature template.
//!
//! Markup uses inline `!important` styles only, no stylesheet.

use crate::{RenderedSignature, SignatureFields};

/// Hosted copy of the anniversary logo referenced by every signature
pub const DEFAULT_LOGO_URL: &str =
    "https://drive.google.com/uc?export=view&id=1kimse450fjg5kMCFIpowMdrBKkQTYxi5";

pub const COMPANY_NAME: &str = "BETTER WORLD ADVERTISING";
pub const COMPANY_STREET: &str = "1010 B Street, Suite 328";
pub const COMPANY_CITY: &str = "San Rafael CA 94901";
pub const COMPANY_WEBSITE: &str = "www.socialmarketing.com";

/// Renders signatures against a fixed logo URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTemplate {
    logo_url: String,
}

impl SignatureTemplate {
    pub fn new(logo_url: impl Into<String>) -> Self {
        Self {
            logo_url: logo_url.into(),
        }
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    /// Render the HTML signature and its plain-text companion.
    ///
    /// Field values are embedded verbatim; empty fields fall back to their
    /// placeholders.
    pub fn render(&self, fields: &SignatureFields) -> RenderedSignature {
        RenderedSignature::from_html(self.render_html(fields))
    }

    pub fn render_html(&self, fields: &SignatureFields) -> String {
        format!(
            r#"<div style="margin-top: 40px !important; margin-bottom: 20px !important;">
<table cellpadding="0" cellspacing="0" border="0" style="font-family: Arial, sans-serif !important; font-size: 11px !important; color: #333333 !important; border-collapse: collapse !important; margin: 0 !important; padding: 0 !important; width: auto !important;">
  <tbody>
  <tr>
    <td style="vertical-align: top !important; padding: 4px 15px 4px 0 !important; margin: 0 !important; border: none !important; white-space: nowrap !important;">
      <div style="font-weight: bold !important; font-size: 14px !important; color: #6f6f6f !important; margin: 0 0 2px 0 !important; line-height: 16px !important; font-family: Arial, sans-serif !important;">{name}</div>
      <div style="color: #5e5e5e !important; font-size: 11px !important; margin: 0 0 1px 0 !important; line-height: 13px !important; font-family: Arial, sans-serif !important;">{title}</div>
      <div style="margin: 0 0 2px 0 !important; line-height: 13px !important; font-family: Arial, sans-serif !important;">
        <a href="mailto:{email}" style="color: #1976D2 !important; text-decoration: underline !important; font-size: 11px !important; font-family: Arial, sans-serif !important;">{email}</a>
      </div>
      <div style="color: #5e5e5e !important; font-size: 10px !important; margin: 0 !important; line-height: 12px !important; font-family: Arial, sans-serif !important;">TEL // {phone}</div>
    </td>
    <td style="vertical-align: top !important; padding: 4px 0 4px 15px !important; margin: 0 !important; border-left: 1px solid #cccccc !important;">
      <div style="font-weight: bold !important; font-size: 11px !important; color: #606060 !important; margin: 0 0 2px 0 !important; line-height: 13px !important; white-space: nowrap !important; font-family: Arial, sans-serif !important;">{company}</div>
      <div style="font-size: 11px !important; color: #5e5e5e !important; margin: 0 0 1px 0 !important; line-height: 13px !important; font-family: Arial, sans-serif !important;">{street}</div>
      <div style="font-size: 11px !important; color: #5e5e5e !important; margin: 0 0 1px 0 !important; line-height: 13px !important; font-family: Arial, sans-serif !important;">{city}</div>
      <div style="margin: 0 !important; line-height: 13px !important; font-family: Arial, sans-serif !important;">
        <a href="http://{website}" style="color: #1976D2 !important; text-decoration: underline !important; font-size: 11px !important; font-family: Arial, sans-serif !important;">{website}</a>
      </div>
    </td>
  </tr>
  <tr>
    <td colspan="2" style="padding: 18px 0 0 0 !important; margin: 0 !important;">
      <img src="{logo_url}" alt="Better World Advertising 30th Anniversary" style="width: 150px !important; height: auto !important; display: block !important; border: none !important; max-width: 150px !important;" />
    </td>
  </tr>
  </tbody>
</table>
</div>"#,
            name = fields.display_name(),
            title = fields.display_title(),
            email = fields.display_email(),
            phone = fields.display_phone(),
            company = COMPANY_NAME,
            street = COMPANY_STREET,
            city = COMPANY_CITY,
            website = COMPANY_WEBSITE,
            logo_url = self.logo_url,
        )
    }
}

impl Default for SignatureTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_LOGO_URL)
    }
}
