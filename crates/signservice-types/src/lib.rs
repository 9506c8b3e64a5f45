//! Shared types, adapter traits, and error types for the signature service
//! configuration layer.
//!
//! This crate holds the vocabulary shared between the configuration engine
//! and cache adapter implementations: untyped configuration values, the cache
//! adapter contract, and the certificate field lookup tables. Adapter crates
//! depend only on this crate.

pub mod cache_adapter;
pub mod error;
pub mod fields;
pub mod prelude;
pub mod raw_value;
pub mod types;

// vim: ts=4
