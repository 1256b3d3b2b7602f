mod error;
mod extractors;
mod user_dto;
