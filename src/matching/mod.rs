//! Projection of server-ranked match lists

pub mod projector;

pub use projector::{clamp_limit, project};
