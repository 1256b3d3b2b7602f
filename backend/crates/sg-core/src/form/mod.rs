pub mod access_request_form;
pub mod clipboard_payload;
pub mod email;
pub mod form_field;
pub mod login_form;
pub mod preview_session;
pub mod signature_form;
