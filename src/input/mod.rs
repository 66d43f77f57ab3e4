//! Input loading module
//! Handles file detection and record export loading

pub mod file_detector;
pub mod manager;
