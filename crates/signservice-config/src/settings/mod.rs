//! Settings assemblers
//!
//! Build typed settings structures from configuration sections using the
//! coercion engine. Error messages name the offending field and section.

pub mod timestamp;
pub mod visible_signature;

pub use timestamp::TimeStampSettings;
pub use visible_signature::VisibleSignatureSettings;

// vim: ts=4
