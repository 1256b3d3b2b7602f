pub mod archive;
pub mod resize;
