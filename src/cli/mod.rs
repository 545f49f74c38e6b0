//! Command Line Interface for the Litsieve review automator.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
