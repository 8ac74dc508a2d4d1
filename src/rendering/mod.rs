//! Rendering of the CV record into format-specific markup

mod generator;
mod html;
mod latex;

// Re-export all public symbols
pub use generator::*;
pub use html::*;
pub use latex::*;
