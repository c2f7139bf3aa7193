pub mod cache;
pub mod csv;
pub mod loader;
pub mod source;
