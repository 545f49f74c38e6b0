//! Bibliographic record model.
//!
//! [`RawRecord`] carries the full field set returned by the search
//! provider; [`ScreenedRecord`] is the essential-column projection that
//! survives the screening phase.

pub mod raw;
pub mod screened;

// Re-export commonly used types
pub use raw::RawRecord;
pub use screened::ScreenedRecord;
