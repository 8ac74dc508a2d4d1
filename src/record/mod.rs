//! The personal-history record and its error types

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
