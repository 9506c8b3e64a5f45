//! Tracing subscriber setup for binaries embedding the configuration layer

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed, so embedding
/// applications keep control over their own logging setup.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_target(false)
		.try_init();
}


// vim: ts=4
