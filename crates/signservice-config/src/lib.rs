//! Configuration layer of the signature service.
//!
//! Turns untyped configuration values into typed settings with uniform
//! failure reporting, assembles the service's settings groups from them, and
//! fronts pluggable cache adapters with lifecycle and argument checks.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod coerce;
pub mod color;
pub mod keystore;
pub mod logging;
pub mod prelude;
pub mod settings;

pub use cache::CacheService;
pub use coerce::{FromRawValue, coerce, coerce_required};
pub use color::Color;
pub use settings::{TimeStampSettings, VisibleSignatureSettings};

// vim: ts=4
