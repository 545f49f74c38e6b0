//! # Litsieve
//!
//! Automation for the identification and screening phases of a PRISMA-style
//! systematic literature review.
//!
//! ## Features
//!
//! - Combinatorial expansion of keyword groups into boolean search strings ("splits")
//! - Layered keyword graph with depth-first combination traversal
//! - Optional (skippable) keywords and OR-grouped keyword alternatives
//! - Search collection with result-count thresholding and exclusion bookkeeping
//! - Record screening: column pruning, deduplication, invalid-record removal
//! - Plain-text and CSV export of all run artifacts

pub mod cli;
pub mod error;
pub mod export;
pub mod keyword;
pub mod record;
pub mod screen;
pub mod search;
pub mod split;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
