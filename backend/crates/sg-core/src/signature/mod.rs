pub mod plain_text;
pub mod rendered_signature;
pub mod signature_fields;
pub mod signature_template;
