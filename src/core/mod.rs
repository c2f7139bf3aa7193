pub mod catalog;
pub mod segmenter;
pub mod table;
pub mod types;
