pub mod collection;
pub mod config;
pub mod error;
pub mod fixture;
pub mod logger;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use error::{CurlpostError, Result};
