// src/lib.rs

pub mod core;
pub mod data;
pub mod error;
pub mod persistence;
pub mod render;

pub use crate::core::segmenter::segment;
pub use crate::data::loader::VerbLoader;
