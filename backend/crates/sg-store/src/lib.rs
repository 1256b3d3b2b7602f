pub mod error;
pub mod user_store;

pub use error::{Result, StoreError};
pub use user_store::UserStore;
