//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod memory_cache;

pub use memory_cache::MemoryCache;

/// Initialize a tracing subscriber writing to the test output.
/// Safe to call from every test.
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

// vim: ts=4
