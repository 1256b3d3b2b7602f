pub mod admin;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod logo;
pub mod message_response;
pub mod rejection;
pub mod signature;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
