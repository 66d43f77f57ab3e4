//! Rendering of filtered records and projected matches

pub mod formatter;
