//! Input pipeline: file type detection and text extraction

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
