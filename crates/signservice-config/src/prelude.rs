pub use signservice_types::prelude::*;

pub use tracing::{debug_span, info_span, warn_span};

// vim: ts=4
