pub mod error;
pub mod form;
pub mod logo;
pub mod models;
pub mod signature;

pub use error::{CoreError, Result};
pub use form::access_request_form::AccessRequestForm;
pub use form::clipboard_payload::ClipboardPayload;
pub use form::email::{has_domain_suffix, is_valid_email};
pub use form::form_field::FormField;
pub use form::login_form::LoginForm;
pub use form::preview_session::{LogoReplacement, PreviewSession};
pub use form::signature_form::{DEFAULT_PHONE, SignatureForm, sanitize_phone};
pub use logo::archive::{FIRST_ARCHIVE_VERSION, archive_file_name};
pub use logo::resize::{
    MAX_RESIZE_HEIGHT, MAX_RESIZE_WIDTH, ResizedLogo, is_image_content_type, resize_to_width,
};
pub use models::logo::Logo;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_approval::UserApproval;
pub use signature::plain_text::to_plain_text;
pub use signature::rendered_signature::RenderedSignature;
pub use signature::signature_fields::SignatureFields;
pub use signature::signature_template::SignatureTemplate;

/// Domain employees must belong to before they can request access.
pub const DEFAULT_EMAIL_DOMAIN: &str = "socialmarketing.com";
/// Width every replacement logo is scaled to.
pub const DEFAULT_LOGO_TARGET_WIDTH: u32 = 189;
/// File name of the logo shipped with the generator.
pub const DEFAULT_LOGO_FILENAME: &str = "BWA30New2.png";

#[cfg(test)]
mod tests;
