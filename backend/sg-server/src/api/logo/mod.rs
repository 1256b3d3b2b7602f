pub mod logo;
pub mod resize_query;
