pub mod client_addr;
pub mod session_user;
