//! ATS screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod matching;
pub mod model;
pub mod output;

pub use config::Config;
pub use error::{Result, ScreenerError};
